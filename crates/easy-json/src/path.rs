//! RFC 6901 pointers locating the element a conversion failed on.

/// Stack of unescaped path components, pushed on the way into containers.
#[derive(Debug, Clone, Default)]
pub(crate) struct Path {
    components: Vec<String>,
}

impl Path {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of containers entered so far.
    pub(crate) fn depth(&self) -> usize {
        self.components.len()
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.components.push(index.to_string());
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        self.components.push(key.to_owned());
    }

    pub(crate) fn pop(&mut self) {
        self.components.pop();
    }

    /// Formats the current position as a JSON Pointer (`""` for the root).
    pub(crate) fn to_pointer(&self) -> String {
        let mut out = String::new();
        for component in &self.components {
            out.push('/');
            out.push_str(&escape_component(component));
        }
        out
    }
}

fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}
