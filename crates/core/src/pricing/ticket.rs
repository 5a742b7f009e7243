//! Tickets, category pricing and add-on extras.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::screening::screening::Screening;
use crate::seat::seat::SeatId;

/// Ticket category. A closed set; each category is its own price factory,
/// applying a fixed multiplier to the screening's base price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Regular,
    Discounted,
    Vip,
}

impl TicketCategory {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Regular => 1.0,
            Self::Discounted => 0.7,
            Self::Vip => 1.5,
        }
    }

    pub fn price_for(&self, base_price: f64) -> f64 {
        base_price * self.multiplier()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Discounted => "Discounted",
            Self::Vip => "VIP",
        }
    }

    /// Builds a ticket for one seat of the given screening, priced at the
    /// screening's base price times the category multiplier.
    pub fn create_ticket(&self, screening: &Screening, seat: SeatId) -> Ticket {
        Ticket::base(*self, seat, self.price_for(screening.base_price))
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat-priced add-on wrapped around an existing ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketExtra {
    ThreeD,
    SnackCombo,
}

impl TicketExtra {
    pub fn surcharge(&self) -> f64 {
        match self {
            Self::ThreeD => 5.0,
            Self::SnackCombo => 15.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeD => "[3D]",
            Self::SnackCombo => "[+ Snack Combo]",
        }
    }
}

/// A priced claim on one seat for one screening.
///
/// Extras compose by wrapping: the outer layer adds its surcharge to the
/// reported price and appends its label to the display text, while seat and
/// category reads delegate to the wrapped layer. Tickets are transient
/// values; only the reservation's aggregate total is ever persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticket {
    layer: Layer,
}

#[derive(Clone, Debug, PartialEq)]
enum Layer {
    Base {
        category: TicketCategory,
        seat: SeatId,
        price: f64,
    },
    Extra {
        inner: Box<Ticket>,
        extra: TicketExtra,
    },
}

impl Ticket {
    pub fn base(category: TicketCategory, seat: SeatId, price: f64) -> Self {
        Self {
            layer: Layer::Base {
                category,
                seat,
                price,
            },
        }
    }

    /// Wraps this ticket in an add-on layer.
    pub fn with_extra(self, extra: TicketExtra) -> Self {
        Self {
            layer: Layer::Extra {
                inner: Box::new(self),
                extra,
            },
        }
    }

    pub fn category(&self) -> TicketCategory {
        match &self.layer {
            Layer::Base { category, .. } => *category,
            Layer::Extra { inner, .. } => inner.category(),
        }
    }

    pub fn seat(&self) -> SeatId {
        match &self.layer {
            Layer::Base { seat, .. } => *seat,
            Layer::Extra { inner, .. } => inner.seat(),
        }
    }

    /// Price including every wrapped surcharge.
    pub fn price(&self) -> f64 {
        match &self.layer {
            Layer::Base { price, .. } => *price,
            Layer::Extra { inner, extra } => inner.price() + extra.surcharge(),
        }
    }

    /// One-line description, extras appended in the order they were added.
    pub fn describe(&self, screening: &Screening) -> String {
        match &self.layer {
            Layer::Base {
                category,
                seat,
                price,
            } => format!(
                "{} ticket for {} at {}, seat {}, {:.2}",
                category,
                screening.movie.title,
                screening.date_time.format("%H:%M"),
                seat,
                price
            ),
            Layer::Extra { inner, extra } => {
                format!("{} {}", inner.describe(screening), extra.label())
            }
        }
    }
}
