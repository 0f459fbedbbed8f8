// Class-membership interface shared by the live DOM and host-side tests.
// The reveal and click behaviors are written against `ClassList` so the same
// code drives a `web_sys::DomTokenList` in the browser and a `ClassSet` on
// the host.

/// Minimal view of an element's class list with set semantics.
///
/// Adding a class that is already present, or removing one that is absent,
/// must leave the list unchanged.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);

    /// Flip membership of `class`; returns whether it is present afterwards.
    fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }
}

/// In-memory class list preserving insertion order, like `DOMTokenList`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `class` attribute value, dropping duplicate tokens.
    pub fn from_attr(value: &str) -> Self {
        let mut set = Self::new();
        for token in value.split_whitespace() {
            set.add(token);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Serialize back to a `class` attribute value.
    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClassList for ClassSet {
    fn contains(&self, class: &str) -> bool {
        self.tokens.iter().any(|t| t == class)
    }

    fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.tokens.push(class.to_string());
        }
    }

    fn remove(&mut self, class: &str) {
        self.tokens.retain(|t| t != class);
    }
}

/// Click behavior: flip `class` on the clicked element's own list.
#[inline]
pub fn toggle_class<C: ClassList + ?Sized>(list: &mut C, class: &str) -> bool {
    list.toggle(class)
}
