use std::cell::RefCell;
use std::rc::Rc;

use api::ChartSpec;

use super::{ChartError, ChartHandle, ChartSurface, ChartTheme};

/// Record of everything a [`HeadlessSurface`] was asked to do.
#[derive(Debug, Default)]
pub struct SurfaceLedger {
    pub mounted: usize,
    pub disposed: usize,
    pub events: Vec<String>,
    live: Vec<(u64, String)>,
    next_id: u64,
}

impl SurfaceLedger {
    pub fn live_titles(&self) -> Vec<&str> {
        self.live.iter().map(|(_, title)| title.as_str()).collect()
    }
}

/// Surface without a display. Used for native builds and tests; charts are
/// tracked in a shared [`SurfaceLedger`] instead of being drawn.
#[derive(Debug, Default, Clone)]
pub struct HeadlessSurface {
    ledger: Rc<RefCell<SurfaceLedger>>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same signature as the browser surface so views can stay target-agnostic.
    pub fn for_container(_container_id: &str) -> Self {
        Self::new()
    }

    pub fn ledger(&self) -> Rc<RefCell<SurfaceLedger>> {
        self.ledger.clone()
    }
}

impl ChartSurface for HeadlessSurface {
    type Handle = HeadlessChart;

    fn reset(&mut self) {
        self.ledger.borrow_mut().events.push("reset".into());
    }

    fn mount(
        &mut self,
        _index: usize,
        spec: &ChartSpec,
        theme: &ChartTheme,
    ) -> Result<HeadlessChart, ChartError> {
        // Build the config anyway so every target exercises the same path.
        let _config = theme.config_for(spec);

        let mut ledger = self.ledger.borrow_mut();
        let id = ledger.next_id;
        ledger.next_id += 1;
        ledger.mounted += 1;
        ledger.live.push((id, spec.title.clone()));
        ledger.events.push(format!("mount {}", spec.title));

        Ok(HeadlessChart {
            id,
            ledger: self.ledger.clone(),
        })
    }
}

#[derive(Debug)]
pub struct HeadlessChart {
    id: u64,
    ledger: Rc<RefCell<SurfaceLedger>>,
}

impl ChartHandle for HeadlessChart {
    fn dispose(self) {
        let mut ledger = self.ledger.borrow_mut();
        if let Some(pos) = ledger.live.iter().position(|(id, _)| *id == self.id) {
            let (_, title) = ledger.live.remove(pos);
            ledger.events.push(format!("dispose {title}"));
        }
        ledger.disposed += 1;
    }
}
