/// Shows the winning label until it is dismissed, either by the close button
/// or by an optional timer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPresenter {
    auto_dismiss_ms: Option<u32>,
    shown: Option<String>,
}

impl ResultPresenter {
    pub fn new(auto_dismiss_ms: Option<u32>) -> Self {
        Self {
            auto_dismiss_ms,
            shown: None,
        }
    }

    pub fn show(&mut self, label: impl Into<String>) {
        self.shown = Some(label.into());
    }

    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        self.auto_dismiss_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut presenter = ResultPresenter::new(Some(1500));
        assert!(!presenter.is_visible());
        presenter.show("pizza");
        assert_eq!(presenter.shown(), Some("pizza"));
        presenter.dismiss();
        assert!(!presenter.is_visible());
        assert_eq!(presenter.auto_dismiss_ms(), Some(1500));
    }
}
