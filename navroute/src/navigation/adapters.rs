//! One navigation adapter per routing mode.

use crate::costing::CostingOptions;
use crate::domain::RoutingMode;

use super::adapter::NavigationAdapter;

/// The set of per-mode adapters a caller picks from by routing mode.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationAdapters {
    adapters: [NavigationAdapter; RoutingMode::ALL.len()],
}

impl NavigationAdapters {
    /// One adapter per mode, each on its mode's default options.
    pub fn new() -> Self {
        Self {
            adapters: RoutingMode::ALL.map(NavigationAdapter::new),
        }
    }

    pub fn for_mode(&self, mode: RoutingMode) -> &NavigationAdapter {
        &self.adapters[Self::index(mode)]
    }

    pub fn for_mode_mut(&mut self, mode: RoutingMode) -> &mut NavigationAdapter {
        &mut self.adapters[Self::index(mode)]
    }

    /// Install options on the adapter for their costing type.
    pub fn set_options(&mut self, options: CostingOptions) {
        let mode = options.costing_type();
        self.set_options_for_mode(mode, options);
    }

    pub fn set_options_for_mode(&mut self, mode: RoutingMode, options: CostingOptions) {
        self.for_mode_mut(mode).set_options(Some(options));
    }

    /// Restore the mode's default options.
    pub fn reset_options_for_mode(&mut self, mode: RoutingMode) {
        self.for_mode_mut(mode).reset_options();
    }

    // `ALL` lists modes in declaration order.
    fn index(mode: RoutingMode) -> usize {
        mode as usize
    }
}

impl Default for NavigationAdapters {
    fn default() -> Self {
        Self::new()
    }
}
