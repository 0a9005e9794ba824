// src/scene/node.rs
use crate::primitives::Primitive;

// --- Body parts ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    ProximalTail,
    MidTail,
    DistalTail,
    Head,
    LeftEar,
    LeftEye,
    LeftBottomWhisker,
    LeftTopWhisker,
    NoseTop,
    NoseBottom,
    RightEar,
    RightEye,
    RightBottomWhisker,
    RightTopWhisker,
    Body,
    LeftBackLeg,
    LeftFrontLeg,
    RightFrontToe,
    RightBackLeg,
    RightFrontLeg,
    LeftFrontToe,
    LeftBackToe,
    RightBackToe,
    PartyHat,
}

impl Part {
    /// Every part, in draw order.
    pub const DRAW_ORDER: [Part; 24] = [
        Part::ProximalTail,
        Part::MidTail,
        Part::DistalTail,
        Part::Head,
        Part::LeftEar,
        Part::LeftEye,
        Part::LeftBottomWhisker,
        Part::LeftTopWhisker,
        Part::NoseTop,
        Part::NoseBottom,
        Part::RightEar,
        Part::RightEye,
        Part::RightBottomWhisker,
        Part::RightTopWhisker,
        Part::Body,
        Part::LeftBackLeg,
        Part::LeftFrontLeg,
        Part::RightFrontToe,
        Part::RightBackLeg,
        Part::RightFrontLeg,
        Part::LeftFrontToe,
        Part::LeftBackToe,
        Part::RightBackToe,
        Part::PartyHat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Part::ProximalTail => "proximal tail",
            Part::MidTail => "mid tail",
            Part::DistalTail => "distal tail",
            Part::Head => "head",
            Part::LeftEar => "left ear",
            Part::LeftEye => "left eye",
            Part::LeftBottomWhisker => "left-bottom whisker",
            Part::LeftTopWhisker => "left-top whisker",
            Part::NoseTop => "nose top",
            Part::NoseBottom => "nose bottom",
            Part::RightEar => "right ear",
            Part::RightEye => "right eye",
            Part::RightBottomWhisker => "right-bottom whisker",
            Part::RightTopWhisker => "right-top whisker",
            Part::Body => "body",
            Part::LeftBackLeg => "left-back leg",
            Part::LeftFrontLeg => "left-front leg",
            Part::RightFrontToe => "right-front toe",
            Part::RightBackLeg => "right-back leg",
            Part::RightFrontLeg => "right-front leg",
            Part::LeftFrontToe => "left-front toe",
            Part::LeftBackToe => "left-back toe",
            Part::RightBackToe => "right-back toe",
            Part::PartyHat => "party hat",
        }
    }
}

// A primitive placed for this frame, tagged with the part it draws.
#[derive(Clone, Debug, PartialEq)]
pub struct PosedPrimitive {
    pub part: Part,
    pub primitive: Primitive,
}
