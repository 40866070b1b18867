//! Mapping from a radiology order into the Common Order segment

use log::debug;
use roentgen_core::RadiologyOrder;

use crate::codes::{OrderControl, OrderPriority};
use crate::datetime::plain_date_time;
use crate::error::Hl7Error;
use crate::segment::OrcSegment;

/// Fill an HL7 v2.3.1 Common Order (ORC) segment from a radiology order
///
/// The segment is mutated in place and the same borrow handed back.
/// Nullable references are modeled as `Option`; a missing segment or
/// order is a contract violation reported as `InvalidArgument` before
/// any mutation, segment checked first. A value the segment cannot
/// encode propagates as `DataType` and may leave the segment partially
/// populated.
pub fn populate_common_order<'a>(
    segment: Option<&'a mut OrcSegment>,
    order: Option<&RadiologyOrder>,
    order_control: OrderControl,
    priority: OrderPriority,
) -> Result<&'a mut OrcSegment, Hl7Error> {
    let segment = segment.ok_or_else(|| {
        Hl7Error::InvalidArgument("commonOrderSegment cannot be null.".to_string())
    })?;
    let order = order
        .ok_or_else(|| Hl7Error::InvalidArgument("radiologyOrder cannot be null.".to_string()))?;

    debug!(
        "populating common order segment for order {} ({:?}, {:?})",
        order.order_id, order_control, priority
    );

    segment.set_order_control(order_control.code())?;
    segment.set_placer_order_number(order.order_number.as_deref().unwrap_or(""))?;
    segment.set_start_date_time(&plain_date_time(order.effective_start_date()))?;
    segment.set_priority(priority.code())?;

    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::EncodingCharacters;
    use chrono::NaiveDate;
    use roentgen_core::Urgency;

    fn scheduled_order() -> RadiologyOrder {
        let mut order = RadiologyOrder::new(1);
        order.order_number = Some(format!("ORD-{}", order.order_id));
        order.urgency = Urgency::OnScheduledDate;
        order.scheduled_date = Some(
            NaiveDate::from_ymd_opt(2015, 2, 4)
                .unwrap()
                .and_hms_opt(14, 35, 0)
                .unwrap(),
        );
        order
    }

    #[test]
    fn test_populates_all_sub_fields() {
        let _ = env_logger::builder().is_test(true).try_init();

        let order = scheduled_order();
        let mut orc = OrcSegment::new();

        populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap();

        assert_eq!(orc.order_control(), "NW");
        assert_eq!(orc.placer_order_number(), "ORD-1");
        assert_eq!(orc.start_date_time(), "20150204143500");
        assert_eq!(orc.priority(), "S");
        assert_eq!(
            orc.encode(&EncodingCharacters::standard()),
            "ORC|NW|ORD-1|||||^^^20150204143500^^S"
        );
    }

    #[test]
    fn test_missing_segment_is_invalid_argument() {
        let order = RadiologyOrder::new(1);

        let err = populate_common_order(
            None,
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap_err();

        assert!(matches!(err, Hl7Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "commonOrderSegment cannot be null.");
    }

    #[test]
    fn test_missing_order_is_invalid_argument() {
        let mut orc = OrcSegment::new();

        let err = populate_common_order(
            Some(&mut orc),
            None,
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap_err();

        assert!(matches!(err, Hl7Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "radiologyOrder cannot be null.");
        // checked before any mutation
        assert_eq!(orc.encode(&EncodingCharacters::standard()), "ORC");
    }

    #[test]
    fn test_missing_order_number_writes_empty_string() {
        let mut order = scheduled_order();
        order.order_number = None;
        let mut orc = OrcSegment::new();

        populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap();

        assert_eq!(orc.placer_order_number(), "");
    }

    #[test]
    fn test_missing_start_date_writes_empty_string() {
        let mut order = scheduled_order();
        order.scheduled_date = None;
        let mut orc = OrcSegment::new();

        populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap();

        assert_eq!(orc.start_date_time(), "");
        assert_eq!(
            orc.encode(&EncodingCharacters::standard()),
            "ORC|NW|ORD-1|||||^^^^^S"
        );
    }

    #[test]
    fn test_populate_is_idempotent() {
        let order = scheduled_order();
        let mut orc = OrcSegment::new();

        populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap();
        let once = orc.encode(&EncodingCharacters::standard());

        populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap();
        let twice = orc.encode(&EncodingCharacters::standard());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unencodable_order_number_propagates_data_type_error() {
        let mut order = scheduled_order();
        order.order_number = Some("ORD^1".to_string());
        let mut orc = OrcSegment::new();

        let err = populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::NewOrder,
            OrderPriority::Stat,
        )
        .unwrap_err();

        assert!(matches!(err, Hl7Error::DataType { .. }));
        // rules apply in order with no rollback
        assert_eq!(orc.order_control(), "NW");
        assert_eq!(orc.placer_order_number(), "");
    }

    #[test]
    fn test_cancel_order_routine_priority() {
        let mut order = scheduled_order();
        order.order_number = Some("ORD-2".to_string());
        let mut orc = OrcSegment::new();

        populate_common_order(
            Some(&mut orc),
            Some(&order),
            OrderControl::CancelOrder,
            OrderPriority::Routine,
        )
        .unwrap();

        assert_eq!(orc.order_control(), "CA");
        assert_eq!(orc.priority(), "R");
    }
}
