//! Point-on-element tests.
//!
//! Ellipses are hit tested against their bounding box, not the curve itself,
//! so the corners outside the ellipse still count as hits. Overlaps resolve to
//! the earliest-drawn element, which is the one drawn underneath.

use crate::drawing::{Element, ElementKind};
use crate::geometry::{LINE_HIT_EPSILON, Point, point_in_bounding_box, point_near_segment};

pub fn is_within<D>(point: Point, element: &Element<D>) -> bool {
    match element.kind() {
        ElementKind::Rectangle | ElementKind::Ellipse => {
            point_in_bounding_box(point, element.start(), element.end())
        }
        ElementKind::Line => {
            point_near_segment(point, element.start(), element.end(), LINE_HIT_EPSILON)
        }
    }
}

pub fn find_at_position<'a, D, I>(point: Point, elements: I) -> Option<&'a Element<D>>
where
    D: 'a,
    I: IntoIterator<Item = &'a Element<D>>,
{
    elements.into_iter().find(|element| is_within(point, element))
}
