//! Day x slot timetable grid.
//!
//! Arranges course meetings on the fixed 7-day, 6-slot grid the timetable
//! pages render. Rendering collapses rows and columns that are empty for
//! most people (weekend days, the two late slots), so the grid derives
//! one flag per collapsible axis.

use crate::timetable::CourseRecord;
use serde::Serialize;
use utoipa::ToSchema;

/// One populated grid position.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GridCell {
    /// Weekday, 1 = Monday through 7 = Sunday.
    pub day: u8,
    /// Slot within the six-slot half-day scheme.
    pub slot: u8,
    /// Meetings at this position, in upstream order.
    pub courses: Vec<CourseRecord>,
}

/// A placed timetable.
///
/// Nothing is dropped or reordered: several meetings at the same position
/// are kept as a sequence, and cells appear in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimetableGrid {
    cells: Vec<GridCell>,
    pub empty_saturday: bool,
    pub empty_sunday: bool,
    pub empty_slot5: bool,
    pub empty_slot6: bool,
}

impl TimetableGrid {
    /// Places course meetings on the grid and derives the empty-axis flags.
    pub fn place(courses: Vec<CourseRecord>) -> Self {
        let mut cells: Vec<GridCell> = Vec::new();

        for course in courses {
            let day = course.lesson.day();
            let slot = course.lesson.slot();
            match cells.iter_mut().find(|c| c.day == day && c.slot == slot) {
                Some(cell) => cell.courses.push(course),
                None => cells.push(GridCell {
                    day,
                    slot,
                    courses: vec![course],
                }),
            }
        }

        let occupied =
            |day: u8, slot: u8| cells.iter().any(|c| c.day == day && c.slot == slot);

        // Weekend flags look across all six slots of the day; slot flags
        // look across all seven days. The four checks are independent.
        let empty_saturday = !(1..=6).any(|slot| occupied(6, slot));
        let empty_sunday = !(1..=6).any(|slot| occupied(7, slot));
        let empty_slot5 = !(1..=7).any(|day| occupied(day, 5));
        let empty_slot6 = !(1..=7).any(|day| occupied(day, 6));

        Self {
            cells,
            empty_saturday,
            empty_sunday,
            empty_slot5,
            empty_slot6,
        }
    }

    /// The populated positions, in first-occurrence order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The meetings at one position, if any.
    pub fn bucket(&self, day: u8, slot: u8) -> Option<&[CourseRecord]> {
        self.cells
            .iter()
            .find(|c| c.day == day && c.slot == slot)
            .map(|c| c.courses.as_slice())
    }
}
