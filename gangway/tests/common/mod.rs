use gangway::{Application, HostPage, MemoryPorts, PortEvent, PortTable, Viewport};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Application
// ============================================================================

pub struct TestApp {
    pub ports: Arc<MemoryPorts<PortEvent>>,
}

impl Application for TestApp {
    fn ports(&self) -> Arc<dyn PortTable<PortEvent>> {
        self.ports.clone()
    }
}

// ============================================================================
// Test Host
// ============================================================================

/// A host page whose cookie jar can change between reads, for exercising
/// token refresh.
pub struct SharedPage {
    pub page_attribute: Option<String>,
    pub cookie_header: Arc<Mutex<String>>,
    pub viewport: Viewport,
}

impl HostPage for SharedPage {
    fn page_attribute(&self) -> Option<String> {
        self.page_attribute.clone()
    }

    fn cookie_header(&self) -> String {
        self.cookie_header.lock().unwrap().clone()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
