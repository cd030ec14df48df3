//! User-facing copy for every validation message, grouped by task variant.
//!
//! Messages are shown verbatim in the error banner, so tests compare against
//! these constants rather than literal strings.

// --- Interaction ---

pub const NARRATION_BLANK: &str = "The narration cannot be blank.";
pub const NARRATION_UNCHANGED: &str =
    "Please rewrite the narration in the third person; it cannot be identical to the original.";
pub const REMOVAL_UNANSWERED: &str = "Please answer whether any objects are removed.";
pub const REMOVAL_EMPTY: &str = "Please select the removed item(s) or click no.";
pub const REMOVAL_UNKNOWN: &str =
    "Removed items must be chosen from the listed objects, each one once.";
pub const CREATION_UNANSWERED: &str = "Please answer whether a new entity is created.";
pub const CREATION_NAME: &str = "The created entity needs a name.";
pub const CREATION_DESC: &str = "The created entity needs a description.";
pub const CREATION_LOCATION: &str = "Please choose where the created entity appears.";
pub const DESCRIPTION_UNANSWERED: &str =
    "Please answer whether the objects' descriptions change.";
pub const PRIMARY_DESCRIPTION: &str =
    "Please update the description of the first object, or click no.";
pub const SECONDARY_DESCRIPTION: &str =
    "Please update the description of the second object, or click no.";
pub const LOCATION_UNANSWERED: &str = "Please answer whether any object changes location.";
pub const LOCATION_DESTINATION: &str = "Please choose where the moved object ends up.";
pub const ATTRIBUTE_CHANGE_NAME: &str = "Every attribute change needs a name.";
pub const ATTRIBUTE_CONSTRAINT_NAME: &str = "Every attribute requirement needs a name.";
pub const HELD_UNANSWERED: &str = "Please answer whether the second object must be held.";
pub const ROOM_UNANSWERED: &str =
    "Please answer whether the interaction only works in a certain room.";
pub const ROOM_BLANK: &str = "Please name the room the interaction is limited to.";
pub const REVERSIBLE_UNANSWERED: &str = "Please answer whether the interaction can be undone.";
pub const INFINITE_UNANSWERED: &str =
    "Please answer whether the interaction can happen any number of times.";
pub const TIMES_REMAINING: &str =
    "Please enter how many times the interaction can happen (at least once).";

// --- Description ---

pub const DESCRIPTIONS_MISSING: &str = "Please write a description for every object.";
pub const DESCRIPTIONS_UNCHANGED: &str =
    "Please update every description; it cannot be identical to the current one.";
pub const TAG_BLANK: &str = "Tags cannot be blank.";

// --- Safety ---

pub const SAFE_UNANSWERED: &str = "Please answer whether the narration is safe.";
pub const CATEGORIES_EMPTY: &str = "Please select at least one reason the narration is unsafe.";
pub const CONTEXT_UNANSWERED: &str =
    "Please answer whether the narration would be acceptable in another setting.";
pub const RATIONALE_BLANK: &str = "Please explain which setting makes the narration acceptable.";
