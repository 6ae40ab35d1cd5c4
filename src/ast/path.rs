//! Addressing nodes inside a [`Game`](super::Game).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One step from a node to a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    Pregame,
    LetsGo,
    PlayBall,
    Inning(usize),
    Top,
    Bottom,
    Start,
    Entry(usize),
    BatterUp,
    Pitch(usize),
    Outcome,
    Outing,
    Final,
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Pregame => f.write_str("pregame"),
            PathSegment::LetsGo => f.write_str("lets_go"),
            PathSegment::PlayBall => f.write_str("play_ball"),
            PathSegment::Inning(i) => write!(f, "inning[{}]", i),
            PathSegment::Top => f.write_str("top"),
            PathSegment::Bottom => f.write_str("bottom"),
            PathSegment::Start => f.write_str("start"),
            PathSegment::Entry(i) => write!(f, "entry[{}]", i),
            PathSegment::BatterUp => f.write_str("batter_up"),
            PathSegment::Pitch(i) => write!(f, "pitch[{}]", i),
            PathSegment::Outcome => f.write_str("outcome"),
            PathSegment::Outing => f.write_str("outing"),
            PathSegment::Final => f.write_str("final"),
        }
    }
}

/// Path from the game root to a node, e.g. `game/inning[2]/bottom/entry[0]/pitch[3]`.
///
/// Paths rarely exceed six segments, so they stay inline. Serializes as a
/// plain list of segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(SmallVec<[PathSegment; 6]>);

impl NodePath {
    /// The path of the root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// A copy of this path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut path = self.clone();
        path.0.push(segment);
        path
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<PathSegment> for NodePath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("game")?;
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
