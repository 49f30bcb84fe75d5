use std::cell::RefCell;
use std::rc::Rc;
use crate::controller::{ Lifecycle, LifecycleState };
use crate::error::ThemeError;

/// An initialization waiting for the page to finish loading.
pub type PendingInit = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootStep {
    Deferred,
    Initialized,
}

/// Only a document that is still parsing has elements yet to appear;
/// "interactive" and "complete" both mean the DOM is built.
pub fn defer_init(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Routes every start request for one page through a single lifecycle, so
/// deferred and immediate starts together initialize at most once.
#[derive(Clone, Default)]
pub struct PageBoot {
    lifecycle: Rc<RefCell<Lifecycle>>,
}

impl PageBoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.borrow().state()
    }

    /// Runs `init` now, or hands it to `defer` to run when the page is ready.
    pub fn start<I>(
        &self,
        ready_state: &str,
        defer: impl FnOnce(PendingInit) -> Result<(), ThemeError>,
        init: I
    ) -> Result<BootStep, ThemeError>
        where I: FnOnce() -> Result<(), ThemeError> + 'static
    {
        if !defer_init(ready_state) {
            self.run(init)?;
            return Ok(BootStep::Initialized);
        }

        log::debug!("Document still loading, deferring theme init");
        let boot = self.clone();
        defer(
            Box::new(move || {
                if let Err(e) = boot.run(init) {
                    log::error!("Theme init failed: {}", e);
                }
            })
        )?;
        Ok(BootStep::Deferred)
    }

    fn run(&self, init: impl FnOnce() -> Result<(), ThemeError>) -> Result<(), ThemeError> {
        self.lifecycle.borrow_mut().enter(init)
    }
}
