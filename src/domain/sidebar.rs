/// Collapsed/expanded state of the selection sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    minimized: bool,
}

impl Sidebar {
    pub fn new(minimized: bool) -> Self {
        Self { minimized }
    }

    pub fn toggle(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn class(&self) -> &'static str {
        if self.minimized {
            "sidebar minimized"
        } else {
            "sidebar"
        }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.minimized.then_some("sidebar-minimized")
    }

    pub fn icon(&self) -> &'static str {
        if self.minimized {
            "▶"
        } else {
            "◀"
        }
    }
}
