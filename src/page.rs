//! Page-load orchestration
//!
//! Runs once per load: track the choice, log it, then produce the updates
//! the page needs. Applying them is left to the caller (the DOM adapter on
//! the web, a log dump natively).

use crate::choice::{ChoiceState, RandomSource, get_or_assign_choice};
use crate::render::{UiUpdate, plan_page};
use crate::store::Store;

/// Outcome of one page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub state: ChoiceState,
    pub updates: Vec<UiUpdate>,
}

/// Handle a page load against `store`
pub fn start<S, R>(store: &mut S, random: &mut R) -> PageLoad
where
    S: Store + ?Sized,
    R: RandomSource + ?Sized,
{
    let state = get_or_assign_choice(store, random);
    log::info!("cookieDetails: {}", state.to_pretty_json());

    let updates = plan_page(&state);
    PageLoad { state, updates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BallSpec, render_ball};
    use crate::store::{MemoryStore, NullStore};

    #[test]
    fn test_first_load_plan() {
        let mut store = MemoryStore::new();
        let load = start(&mut store, &mut || 0.9);

        assert_eq!(load.state.color, "blue");
        assert_eq!(load.updates.len(), 5);
        assert_eq!(load.updates[1], render_ball(BallSpec::new("blue")));
        assert_eq!(
            load.updates[4],
            UiUpdate::SetHtml {
                selector: "#previousColor",
                html: "-".into()
            }
        );
    }

    #[test]
    fn test_repeat_load_shows_previous() {
        let mut store = MemoryStore::new();
        start(&mut store, &mut || 0.1);
        let load = start(&mut store, &mut || 0.9);

        assert_eq!(load.state.color, "red");
        assert_eq!(
            load.updates[2],
            UiUpdate::SetText {
                selector: "#redCount",
                text: "2".into()
            }
        );
        assert_eq!(
            load.updates[4],
            UiUpdate::SetHtml {
                selector: "#previousColor",
                html: r#"<span style="color: red;">Red</span>"#.into()
            }
        );
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut store: Box<dyn Store> = Box::new(NullStore);
        let load = start(store.as_mut(), &mut || 0.3);
        assert!(load.state.is_first_visit());
        assert_eq!(load.state.red_count, 1);
    }
}
