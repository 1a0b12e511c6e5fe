//! # Availability Resolution
//!
//! Annotates the generated slots of a day with the appointments already
//! stored for it. Matching is done on the slot start minute; appointments
//! that do not line up with any generated slot (for example after the
//! opening hours changed) are skipped without error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::appointment::{Appointment, AppointmentGroup};
use crate::models::time_slot::TimeSlot;
use crate::slots::format_label;

/// Decrements `available` and records the client name for every appointment
/// on `date` that matches a slot.
pub fn resolve_availability(
    date: NaiveDate,
    mut slots: Vec<TimeSlot>,
    appointments: &[Appointment],
) -> Vec<TimeSlot> {
    for appointment in appointments {
        if appointment.date != date {
            debug!(
                "Skipping appointment {} dated {} while resolving {}",
                appointment.id, appointment.date, date
            );
            continue;
        }

        match slots
            .iter_mut()
            .find(|slot| slot.start_minute == appointment.start_minute)
        {
            Some(slot) => {
                slot.available = slot.available.saturating_sub(1);
                slot.booked_by.push(appointment.client_name.clone());
            }
            None => debug!(
                "Appointment {} at {} matches no generated slot",
                appointment.id, appointment.time
            ),
        }
    }

    slots
}

/// Number of appointments holding the given slot.
pub fn count_for_slot(appointments: &[Appointment], date: NaiveDate, start_minute: u16) -> usize {
    appointments
        .iter()
        .filter(|a| a.date == date && a.start_minute == start_minute)
        .count()
}

/// Groups appointments by slot start, earliest slot first. Within a slot the
/// input order is kept.
pub fn group_by_slot(appointments: Vec<Appointment>) -> Vec<AppointmentGroup> {
    let mut groups: BTreeMap<u16, Vec<Appointment>> = BTreeMap::new();
    for appointment in appointments {
        groups
            .entry(appointment.start_minute)
            .or_default()
            .push(appointment);
    }

    groups
        .into_iter()
        .map(|(start_minute, appointments)| AppointmentGroup {
            start_minute,
            time: format_label(start_minute),
            appointments,
        })
        .collect()
}
