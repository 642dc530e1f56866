//! Registry of drag sources the drop target accepts.
//!
//! The key domain is the closed [`DragKind`] enum, so the table is a fixed
//! array indexed by kind rather than a map keyed by type strings.

use crate::models::event::DragKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub kind: DragKind,
    /// Type tag the host's drag primitive uses for this source
    pub type_tag: &'static str,
}

impl DragKind {
    pub fn type_tag(self) -> &'static str {
        match self {
            DragKind::NewEvent => "newEvent",
            DragKind::MoveEvent => "event",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: [Option<SourceDescriptor>; 2],
}

impl SourceRegistry {
    /// Registry accepting exactly `kinds`
    pub fn new(kinds: impl IntoIterator<Item = DragKind>) -> Self {
        let mut sources = [None; 2];
        for kind in kinds {
            sources[kind.index()] = Some(SourceDescriptor {
                kind,
                type_tag: kind.type_tag(),
            });
        }
        Self { sources }
    }

    pub fn get(&self, kind: DragKind) -> Option<&SourceDescriptor> {
        self.sources[kind.index()].as_ref()
    }

    pub fn accepts(&self, kind: DragKind) -> bool {
        self.get(kind).is_some()
    }

    /// Reverse lookup from a drag primitive's type tag
    pub fn kind_for_tag(&self, tag: &str) -> Option<DragKind> {
        self.iter().find(|desc| desc.type_tag == tag).map(|desc| desc.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.sources.iter().flatten()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new(DragKind::ALL)
    }
}
