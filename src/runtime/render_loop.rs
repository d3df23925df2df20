use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::rc::Rc;

pub type RenderTask = Box<dyn FnOnce()>;

/// Queue of work deferred to the next render flush.
///
/// The host calls [`RenderLoop::flush`] once its render pass settled. Tasks
/// scheduled while a flush is running wait for the following flush.
#[derive(Clone, Default)]
pub struct RenderLoop {
    queue: Rc<RefCell<VecDeque<RenderTask>>>,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn schedule(&self, task: RenderTask) {
        self.queue.borrow_mut().push_back(task);
    }
    /// Runs every queued task, returns how many ran.
    pub fn flush(&self) -> usize {
        let tasks = mem::take(&mut *self.queue.borrow_mut());
        let count = tasks.len();
        tasks.into_iter().for_each(|task| task());
        count
    }
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl fmt::Debug for RenderLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderLoop")
            .field("pending", &self.pending())
            .finish()
    }
}
