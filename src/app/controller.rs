//! Controller wiring between store and presenter

use crate::models::Task;
use crate::store::TaskStore;
use crate::ui::Presenter;
use std::cell::RefCell;
use std::rc::Rc;

/// Wires presenter gestures to store mutations and store changes back to
/// presenter redraws
///
/// Holds no state of its own beyond the store and the presenter handle. The
/// presenter is shared behind `Rc<RefCell<_>>` so the store's change callback
/// can reach it on the single UI thread.
pub struct Controller<P: Presenter + 'static> {
    store: TaskStore,
    presenter: Rc<RefCell<P>>,
}

impl<P: Presenter + 'static> Controller<P> {
    /// Wire a store to a presenter and perform the initial redraw
    pub fn new(mut store: TaskStore, presenter: Rc<RefCell<P>>) -> Self {
        let view = Rc::clone(&presenter);
        store.subscribe(move |tasks| view.borrow_mut().render(tasks));

        let controller = Controller { store, presenter };
        controller
            .presenter
            .borrow_mut()
            .render(controller.store.tasks());
        controller
    }

    pub fn add_task(&mut self, text: &str) {
        self.store.add_task(text);
    }

    pub fn edit_task(&mut self, id: u64, text: &str) {
        self.store.edit_task(id, text);
    }

    pub fn delete_task(&mut self, id: u64) {
        self.store.delete_task(id);
    }

    pub fn toggle_task(&mut self, id: u64) {
        self.store.toggle_task(id);
    }

    /// Redraw on demand without mutating anything
    pub fn refresh(&mut self) {
        self.presenter.borrow_mut().render(self.store.tasks());
    }

    /// The store's current collection
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }
}
