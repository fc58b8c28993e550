//! The roulette page state: option list, spin lifecycle, result display and
//! the URL token, all owned by one controller. Every mutation goes through
//! here so the location can never drift from the list.

use log::{debug, info};
use rand::Rng;

use crate::config::RouletteConfig;
use crate::error::Result;
use crate::option_list::{OptionList, WheelOption};
use crate::presenter::ResultPresenter;
use crate::share::ShareRequest;
use crate::spin::{SpinPlan, SpinSelector};
use crate::url_sync::{TokenStore, UrlSynchronizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
    ResultShown,
}

/// What happened to a requested edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    /// Dropped without side effects: a spin is running, the label was empty,
    /// or the index was out of range.
    Ignored,
}

pub struct RouletteController<S: TokenStore> {
    options: OptionList,
    spin: SpinSelector,
    presenter: ResultPresenter,
    sync: UrlSynchronizer<S>,
}

impl<S: TokenStore> RouletteController<S> {
    /// Restore the list from the store. This is the only time the store is read.
    pub fn load(store: S, config: &RouletteConfig) -> Self {
        let mut sync = UrlSynchronizer::new(store);
        let options = sync.load();
        info!("roulette ready with {} options", options.len());
        Self {
            options,
            spin: SpinSelector::new(),
            presenter: ResultPresenter::new(config.auto_dismiss_ms),
            sync,
        }
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.spin.selected_index
    }

    pub fn presenter(&self) -> &ResultPresenter {
        &self.presenter
    }

    pub fn committed_token(&self) -> Option<&str> {
        self.sync.committed()
    }

    pub fn store(&self) -> &S {
        self.sync.store()
    }

    pub fn phase(&self) -> Phase {
        if self.spin.is_spinning {
            Phase::Spinning
        } else if self.presenter.is_visible() {
            Phase::ResultShown
        } else {
            Phase::Idle
        }
    }

    pub fn add(&mut self, label: &str) -> Result<Mutation> {
        if self.spin.is_spinning {
            return Ok(Mutation::Ignored);
        }
        let Some(option) = WheelOption::new(label) else {
            return Ok(Mutation::Ignored);
        };
        let mut next = self.options.clone();
        next.push(option);
        self.commit(next)
    }

    pub fn remove(&mut self, index: usize) -> Result<Mutation> {
        if self.spin.is_spinning || index >= self.options.len() {
            return Ok(Mutation::Ignored);
        }
        let mut next = self.options.clone();
        next.remove(index);
        self.commit(next)
    }

    pub fn reset(&mut self) -> Result<Mutation> {
        if self.spin.is_spinning {
            return Ok(Mutation::Ignored);
        }
        let applied = self.commit(OptionList::new())?;
        self.spin.clear_selection();
        Ok(applied)
    }

    /// Write `next` to the store and adopt it. On any error the current list
    /// stays as it was.
    fn commit(&mut self, next: OptionList) -> Result<Mutation> {
        self.sync.commit(&next)?;
        debug!("option list now has {} entries", next.len());
        self.options = next;
        Ok(Mutation::Applied)
    }

    /// Start a spin and return the wedge it must stop on. `None` means the
    /// request was ignored.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        let index = self.spin.spin(self.options.len(), rng)?;
        self.presenter.dismiss();
        debug!("spinning to wedge {} of {}", index, self.options.len());
        Some(index)
    }

    /// [`spin`](Self::spin) plus the number of extra turns the animation
    /// should make, both drawn from `rng`.
    pub fn spin_plan<R: Rng>(&mut self, rng: &mut R) -> Option<SpinPlan> {
        let index = self.spin(rng)?;
        Some(SpinPlan::draw(index, rng))
    }

    /// Animation finished: show the winner and return its label.
    pub fn complete_spin(&mut self) -> Option<&str> {
        let index = self.spin.complete()?;
        let label = self.options.get(index)?.label.clone();
        info!("wheel stopped on {:?}", label);
        self.presenter.show(label);
        self.presenter.shown()
    }

    pub fn dismiss_result(&mut self) {
        self.presenter.dismiss();
    }

    pub fn share_request(&self, origin: &str, title: &str) -> Result<ShareRequest> {
        ShareRequest::new(origin, title, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::constants::{MAX_SPINS, MIN_SPINS};
    use crate::error::RouletteError;
    use crate::option_list::list_of;
    use crate::url_sync::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty() -> RouletteController<MemoryStore> {
        RouletteController::load(MemoryStore::default(), &RouletteConfig::default())
    }

    fn with(labels: &[&str]) -> RouletteController<MemoryStore> {
        let token = codec::encode(&list_of(labels));
        RouletteController::load(MemoryStore::with_token(token), &RouletteConfig::default())
    }

    fn stored(c: &RouletteController<MemoryStore>) -> OptionList {
        codec::decode(c.store().token.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_scenario_add_then_round_trip() {
        let mut c = empty();
        for label in ["A", "B", "C"] {
            assert_eq!(c.add(label).unwrap(), Mutation::Applied);
        }
        let token = codec::encode(c.options());
        assert_eq!(codec::decode(&token).unwrap().labels(), vec!["A", "B", "C"]);
        assert_eq!(c.committed_token(), Some(token.as_str()));
    }

    #[test]
    fn test_scenario_remove_rewrites_location() {
        let mut c = with(&["X", "Y"]);
        assert_eq!(c.remove(0).unwrap(), Mutation::Applied);
        assert_eq!(c.options().labels(), vec!["Y"]);
        assert_eq!(stored(&c), list_of(&["Y"]));
    }

    #[test]
    fn test_scenario_spin_and_present() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut c = with(&["heads", "tails"]);
        let index = c.spin(&mut rng).unwrap();
        assert!(index < 2);
        assert_eq!(c.phase(), Phase::Spinning);

        let expected = c.options().get(index).unwrap().label.clone();
        assert_eq!(c.complete_spin(), Some(expected.as_str()));
        assert_eq!(c.phase(), Phase::ResultShown);
        assert_eq!(c.presenter().shown(), Some(expected.as_str()));

        c.dismiss_result();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.selected_index(), Some(index));
        assert_eq!(c.options().len(), 2);
    }

    #[test]
    fn test_malformed_location_starts_empty() {
        let c = RouletteController::load(MemoryStore::with_token("AAAA"), &RouletteConfig::default());
        assert!(c.options().is_empty());
        assert_eq!(c.store().writes, 0);
    }

    #[test]
    fn test_mutations_ignored_while_spinning() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = with(&["A", "B"]);
        c.spin(&mut rng).unwrap();
        let writes = c.store().writes;

        assert_eq!(c.add("C").unwrap(), Mutation::Ignored);
        assert_eq!(c.remove(0).unwrap(), Mutation::Ignored);
        assert_eq!(c.reset().unwrap(), Mutation::Ignored);
        assert_eq!(c.options(), &list_of(&["A", "B"]));
        assert_eq!(c.store().writes, writes);
    }

    #[test]
    fn test_spin_guard() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut c = with(&["only"]);
        assert_eq!(c.spin(&mut rng), None);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.selected_index(), None);
        assert_eq!(c.complete_spin(), None);
    }

    #[test]
    fn test_new_spin_hides_previous_result() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut c = with(&["A", "B", "C"]);
        c.spin(&mut rng).unwrap();
        c.complete_spin().unwrap();
        assert_eq!(c.phase(), Phase::ResultShown);
        c.spin(&mut rng).unwrap();
        assert!(!c.presenter().is_visible());
        assert_eq!(c.phase(), Phase::Spinning);
    }

    #[test]
    fn test_empty_and_out_of_range_ignored() {
        let mut c = with(&["A"]);
        assert_eq!(c.add("").unwrap(), Mutation::Ignored);
        assert_eq!(c.remove(5).unwrap(), Mutation::Ignored);
        assert_eq!(c.store().writes, 0);
    }

    #[test]
    fn test_whitespace_label_is_added_and_restored() {
        let mut c = with(&["A"]);
        assert_eq!(c.add(" ").unwrap(), Mutation::Applied);
        assert_eq!(c.add("B").unwrap(), Mutation::Applied);
        assert_eq!(stored(&c).labels(), vec!["A", " ", "B"]);

        let token = c.committed_token().unwrap().to_string();
        let reopened = RouletteController::load(MemoryStore::with_token(token), &RouletteConfig::default());
        assert_eq!(reopened.options().labels(), vec!["A", " ", "B"]);
    }

    #[test]
    fn test_spin_plan_draws_only_from_given_rng() {
        let plan = |seed| {
            let mut c = with(&["A", "B", "C", "D"]);
            c.spin_plan(&mut StdRng::seed_from_u64(seed)).unwrap()
        };
        let first = plan(11);
        assert_eq!(first, plan(11));
        assert!(first.index < 4);
        assert!((MIN_SPINS..=MAX_SPINS).contains(&first.turns));

        let mut c = with(&["only"]);
        assert_eq!(c.spin_plan(&mut StdRng::seed_from_u64(11)), None);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_clears_list_and_selection() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut c = with(&["A", "B"]);
        c.spin(&mut rng).unwrap();
        c.complete_spin();
        c.dismiss_result();
        assert_eq!(c.reset().unwrap(), Mutation::Applied);
        assert!(c.options().is_empty());
        assert_eq!(c.selected_index(), None);
        assert!(stored(&c).is_empty());
    }

    #[test]
    fn test_oversize_add_is_rejected() {
        let mut c = empty();
        let mut last_token = None;
        let mut i = 0;
        let err = loop {
            match c.add(&format!("a fairly long option label {}", i)) {
                Ok(Mutation::Applied) => last_token = c.store().token.clone(),
                Ok(Mutation::Ignored) => panic!("add ignored"),
                Err(e) => break e,
            }
            i += 1;
        };
        assert!(matches!(err, RouletteError::OversizeEncoding { .. }));
        assert_eq!(c.options().len(), i);
        assert_eq!(c.store().token, last_token);
        assert_eq!(stored(&c), *c.options());
    }

    #[test]
    fn test_share_request_uses_current_list() {
        let mut c = empty();
        c.add("A").unwrap();
        let req = c.share_request("https://spin.example", "Roulette").unwrap();
        assert!(req.url.ends_with(c.committed_token().unwrap()));
    }
}
