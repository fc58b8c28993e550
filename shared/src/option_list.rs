use crate::constants::{
    PLACEHOLDER_LABEL, PLACEHOLDER_WEDGES, SHARE_SUMMARY_CHARS, SHARE_SUMMARY_SUFFIX,
};

/// One wedge of the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelOption {
    pub label: String,
}

impl WheelOption {
    /// Returns `None` for an empty label. Anything else, whitespace included,
    /// is kept exactly as typed.
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.is_empty() {
            return None;
        }
        Some(Self { label })
    }
}

/// Ordered options; index order is display order and wedge order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionList {
    options: Vec<WheelOption>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WheelOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WheelOption> {
        self.options.iter()
    }

    pub fn push(&mut self, option: WheelOption) {
        self.options.push(option);
    }

    pub fn remove(&mut self, index: usize) -> Option<WheelOption> {
        if index < self.options.len() {
            Some(self.options.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|o| o.label.clone()).collect()
    }

    /// Labels to draw on the wheel. An empty list still gets a few placeholder
    /// wedges so the canvas always has something to render.
    pub fn wheel_labels(&self) -> Vec<String> {
        if self.options.is_empty() {
            vec![PLACEHOLDER_LABEL.to_string(); PLACEHOLDER_WEDGES]
        } else {
            self.labels()
        }
    }

    /// Short text used by the share sheet, e.g. `"pizza,sush... Roulette"`.
    pub fn share_summary(&self) -> String {
        let joined = self.labels().join(",");
        let head: String = joined.chars().take(SHARE_SUMMARY_CHARS).collect();
        format!("{}{}", head, SHARE_SUMMARY_SUFFIX)
    }
}

impl FromIterator<WheelOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = WheelOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a WheelOption;
    type IntoIter = std::slice::Iter<'a, WheelOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
pub(crate) fn list_of(labels: &[&str]) -> OptionList {
    labels
        .iter()
        .map(|l| WheelOption::new(*l).expect("test labels are non-empty"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_labels_rejected() {
        assert!(WheelOption::new("").is_none());
        assert_eq!(WheelOption::new(" ").unwrap().label, " ");
        assert_eq!(WheelOption::new(" a ").unwrap().label, " a ");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = list_of(&["X", "Y"]);
        assert!(list.remove(2).is_none());
        assert_eq!(list.remove(0).unwrap().label, "X");
        assert_eq!(list.labels(), vec!["Y"]);
    }

    #[test]
    fn test_wheel_labels_placeholder() {
        let list = OptionList::new();
        let labels = list.wheel_labels();
        assert_eq!(labels.len(), PLACEHOLDER_WEDGES);
        assert!(labels.iter().all(|l| l == PLACEHOLDER_LABEL));

        let list = list_of(&["A"]);
        assert_eq!(list.wheel_labels(), vec!["A"]);
    }

    #[test]
    fn test_share_summary_truncates_by_char() {
        let list = list_of(&["pizza", "sushi", "tacos"]);
        assert_eq!(list.share_summary(), "pizza,sush... Roulette");

        let list = list_of(&["짜장면", "짬뽕", "탕수육", "볶음밥"]);
        assert_eq!(list.share_summary(), "짜장면,짬뽕,탕수육... Roulette");
    }
}
