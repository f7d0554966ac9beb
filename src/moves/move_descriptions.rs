//! Move value type.
//!
//! A move is the start square, target square, and a flag for the two
//! special cases this engine models: castling and promotion.

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveFlag {
    #[default]
    None,
    Castling,
    PromoteQueen,
    PromoteRook,
    PromoteKnight,
    PromoteBishop,
}

/// Promotion flags in the order they are emitted by the pawn generator.
pub const PROMOTION_FLAGS: [MoveFlag; 4] = [
    MoveFlag::PromoteQueen,
    MoveFlag::PromoteRook,
    MoveFlag::PromoteKnight,
    MoveFlag::PromoteBishop,
];

impl MoveFlag {
    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self {
            MoveFlag::PromoteQueen => Some(PieceKind::Queen),
            MoveFlag::PromoteRook => Some(PieceKind::Rook),
            MoveFlag::PromoteKnight => Some(PieceKind::Knight),
            MoveFlag::PromoteBishop => Some(PieceKind::Bishop),
            MoveFlag::None | MoveFlag::Castling => None,
        }
    }

    #[inline]
    pub const fn from_promotion_kind(kind: PieceKind) -> Option<Self> {
        match kind {
            PieceKind::Queen => Some(MoveFlag::PromoteQueen),
            PieceKind::Rook => Some(MoveFlag::PromoteRook),
            PieceKind::Knight => Some(MoveFlag::PromoteKnight),
            PieceKind::Bishop => Some(MoveFlag::PromoteBishop),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub target: Square,
    pub flag: MoveFlag,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, target: Square) -> Self {
        Self {
            start,
            target,
            flag: MoveFlag::None,
        }
    }

    #[inline]
    pub const fn with_flag(start: Square, target: Square, flag: MoveFlag) -> Self {
        Self {
            start,
            target,
            flag,
        }
    }

    /// Rewrites the promotion choice of a promoting move.
    ///
    /// Non-promoting moves and non-promotable kinds are returned unchanged.
    #[inline]
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        match (self.is_promotion(), MoveFlag::from_promotion_kind(kind)) {
            (true, Some(flag)) => Self { flag, ..self },
            _ => self,
        }
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.flag.promotion_kind().is_some()
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        matches!(self.flag, MoveFlag::Castling)
    }

    #[inline]
    pub const fn promotion_kind(&self) -> Option<PieceKind> {
        self.flag.promotion_kind()
    }
}
