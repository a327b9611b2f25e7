use std::path::PathBuf;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub data_path: Option<PathBuf>,
    /// A data file is being read on the worker.
    pub loading: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, path: PathBuf) {
        self.data_path = Some(path);
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_flag_spans_begin_to_finish() {
        let mut state = UIState::default();
        state.begin_load();
        assert!(state.loading);

        state.finish_load(PathBuf::from("points.json"));
        assert!(!state.loading);
        assert_eq!(state.data_path, Some(PathBuf::from("points.json")));
    }
}
