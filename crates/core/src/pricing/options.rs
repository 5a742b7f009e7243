//! Which ticket categories each hall sells.

use super::ticket::TicketCategory;

/// Lookup table mapping a hall name to the categories sold there.
///
/// "Sala 1" and "Sala 2" sell Regular and Discounted tickets; the VIP hall
/// sells only VIP. A hall the table doesn't know sells nothing — callers
/// must consult this per screening instead of assuming every category is
/// always on offer.
pub fn ticket_options_for_hall(hall_name: &str) -> Vec<TicketCategory> {
    match hall_name {
        "Sala 1" | "Sala 2" => vec![TicketCategory::Regular, TicketCategory::Discounted],
        "Sala VIP" => vec![TicketCategory::Vip],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_halls_offer_regular_and_discounted() {
        for hall in ["Sala 1", "Sala 2"] {
            assert_eq!(
                ticket_options_for_hall(hall),
                vec![TicketCategory::Regular, TicketCategory::Discounted]
            );
        }
    }

    #[test]
    fn test_vip_hall_offers_only_vip() {
        assert_eq!(
            ticket_options_for_hall("Sala VIP"),
            vec![TicketCategory::Vip]
        );
    }

    #[test]
    fn test_unknown_hall_offers_nothing() {
        assert!(ticket_options_for_hall("Sala 7").is_empty());
    }
}
