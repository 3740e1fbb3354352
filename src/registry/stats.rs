#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RegistryMetrics {
    pub templates_compiled: usize,
    pub handlers_registered: usize,
    pub handlers_replaced: usize,
}

impl RegistryMetrics {
    pub fn record_compile(&mut self) {
        self.templates_compiled += 1;
    }

    pub fn record_handler(&mut self, replaced: bool) {
        self.handlers_registered += 1;
        if replaced {
            self.handlers_replaced += 1;
        }
    }
}
