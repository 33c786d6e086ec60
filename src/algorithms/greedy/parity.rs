//! Odd-total balancing with a single solo trip.

use tracing::{debug, warn};

use crate::algorithms::AllocationError;
use crate::calendar::CalendarProvider;
use crate::registry::PersonIdx;

use super::candidate::find_solo_day;
use super::engine::Run;
use super::ordering::sort_by_target;

/// Grants one solo day when the total of all targets is odd.
///
/// The person with the largest target (earliest in input order on ties)
/// travels alone on the earliest empty day outside their blackout dates. The
/// working order is left sorted by descending target. Returns the person
/// served, or `None` when the total is even or no day fits; the latter only
/// shows up later as an unmet target.
pub fn balance_parity<C>(run: &mut Run<'_, C>) -> Result<Option<PersonIdx>, AllocationError>
where
    C: CalendarProvider + ?Sized,
{
    let total = run.registry.total_needed();
    if total % 2 == 0 {
        return Ok(None);
    }

    sort_by_target(&run.registry, &mut run.order);
    let Some(&solo) = run.order.first() else {
        return Ok(None);
    };

    match find_solo_day(&run.ledger, &run.registry, solo) {
        Some(day) => {
            run.commit(day, day, &[solo])?;
            debug!(person = run.registry.name(solo), total, "parity solo placed");
            Ok(Some(solo))
        }
        None => {
            warn!(person = run.registry.name(solo), total, "no free day for parity solo");
            Ok(None)
        }
    }
}
