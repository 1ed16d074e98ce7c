use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct ExtractOptions {
    pub strip_leading_component: bool,
    pub preserve_permissions: bool,
    pub on_progress: Option<Arc<dyn Fn(Progress) + Send + Sync>>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strip_leading_component: false,
            preserve_permissions: true,
            on_progress: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Progress {
    pub entries_processed: usize,
    pub bytes_processed: u64,
    pub current_file: Option<PathBuf>,
}

impl ExtractOptions {
    pub fn strip_leading_component(mut self, strip: bool) -> Self {
        self.strip_leading_component = strip;
        self
    }

    pub fn preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    pub fn on_progress(mut self, callback: Arc<dyn Fn(Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub(crate) fn report_progress(&self, progress: impl FnOnce() -> Progress) {
        if let Some(ref callback) = self.on_progress {
            callback(progress());
        }
    }
}
