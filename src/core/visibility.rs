use super::classes::ClassList;

/// What an intersection update does to the visible class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassAction {
    Add,
    Remove,
}

#[inline]
pub fn action_for(is_intersecting: bool) -> ClassAction {
    if is_intersecting {
        ClassAction::Add
    } else {
        ClassAction::Remove
    }
}

/// Apply one observer entry to a target's class list.
///
/// Returns true when membership actually changed; repeated entries with the
/// same intersecting state return false and leave the list untouched.
pub fn apply_visibility<C: ClassList + ?Sized>(
    list: &mut C,
    is_intersecting: bool,
    class: &str,
) -> bool {
    let was_present = list.contains(class);
    match action_for(is_intersecting) {
        ClassAction::Add => list.add(class),
        ClassAction::Remove => list.remove(class),
    }
    was_present != list.contains(class)
}
