/// Selector and class-name defaults for the reveal behavior.
///
/// The page stylesheet keys its transitions off these names, so they are
/// part of the contract with the HTML rather than tuning knobs.
// Elements observed for viewport intersection
pub const SECTION_SELECTOR: &str = "section";

// Elements that toggle themselves on click
pub const TRIGGER_SELECTOR: &str = ".animate-button";

// Class applied while a section is in view
pub const VISIBLE_CLASS: &str = "animate";

// Class flipped on each click of a trigger
pub const ACTIVE_CLASS: &str = "active";

// IntersectionObserver options
pub const VISIBILITY_THRESHOLD: f64 = 0.1; // fraction of the target that must be visible
pub const ROOT_MARGIN: &str = "0px"; // no growth/shrink of the viewport box

// document.readyState while the parser is still running
pub const READY_STATE_LOADING: &str = "loading";
