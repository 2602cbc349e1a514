//! Break point selection and slicing.

use crate::SceneContent;
use tracing::trace;

/// Choose up to `target_scenes - 1` breaks nearest to evenly spaced positions.
///
/// With no more candidates than `target_scenes`, every candidate is kept and
/// the story simply gets fewer scenes. Otherwise the content is divided into
/// `target_scenes` equal intervals and, for each interior boundary, the
/// closest candidate wins (the earlier one on ties). A candidate already
/// chosen is skipped rather than replaced, so collisions can leave fewer
/// than `target_scenes - 1` breaks.
///
/// `break_points` must be sorted ascending; the result is too.
///
/// # Examples
///
/// ```
/// use scenecraft_segment::select_optimal_breaks;
///
/// let breaks = [10, 20, 30, 40, 50, 60, 70, 80];
/// assert_eq!(select_optimal_breaks(&breaks, 4, 100), vec![20, 50, 70]);
/// ```
pub fn select_optimal_breaks(
    break_points: &[usize],
    target_scenes: usize,
    content_len: usize,
) -> Vec<usize> {
    let target_scenes = target_scenes.max(1);
    if break_points.len() <= target_scenes {
        return break_points.to_vec();
    }

    let ideal_interval = content_len / target_scenes;
    let mut selected: Vec<usize> = Vec::with_capacity(target_scenes.saturating_sub(1));

    for i in 1..target_scenes {
        let ideal = i * ideal_interval;
        let Some(&closest) = break_points.iter().min_by_key(|bp| bp.abs_diff(ideal)) else {
            break;
        };

        if selected.contains(&closest) {
            trace!(ideal, closest, "Break point already selected, skipping");
            continue;
        }
        selected.push(closest);
    }

    selected
}

/// Slice `content` at each break, trimming whitespace and dropping empty slices.
///
/// Any text after the last break becomes a final scene. Scenes are numbered
/// by their position among the non-empty slices. Offsets are byte offsets and
/// must be ascending char boundaries.
pub fn split_by_break_points(content: &str, breaks: &[usize]) -> Vec<SceneContent> {
    let mut scenes = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;

    for &end in breaks {
        push_trimmed(&mut scenes, content, start, end);
        start = end;
    }

    if start < content.len() {
        push_trimmed(&mut scenes, content, start, content.len());
    }

    scenes
}

/// Partition `content` into `target_scenes` windows of equal character width.
///
/// Used when the text has no recognisable boundary markers at all. The last
/// window absorbs the remainder; empty windows are dropped.
///
/// # Examples
///
/// ```
/// use scenecraft_segment::split_by_equal_length;
///
/// let scenes = split_by_equal_length(&"가나다".repeat(4), 3);
/// assert_eq!(scenes.len(), 3);
/// assert_eq!(scenes[0].text(), "가나다가");
/// assert_eq!(scenes[2].text(), "다가나다");
/// ```
pub fn split_by_equal_length(content: &str, target_scenes: usize) -> Vec<SceneContent> {
    let target_scenes = target_scenes.max(1);

    // Byte offset of every char, plus the end of the string
    let boundaries: Vec<usize> = content
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(content.len()))
        .collect();
    let char_count = boundaries.len() - 1;
    let window = char_count / target_scenes;

    let mut scenes = Vec::with_capacity(target_scenes);
    for i in 0..target_scenes {
        let first = i * window;
        let last = if i == target_scenes - 1 {
            char_count
        } else {
            first + window
        };
        push_trimmed(&mut scenes, content, boundaries[first], boundaries[last]);
    }

    scenes
}

fn push_trimmed(scenes: &mut Vec<SceneContent>, content: &str, start: usize, end: usize) {
    let text = content[start..end].trim();
    if text.is_empty() {
        return;
    }

    scenes.push(SceneContent::new(scenes.len() + 1, text, start, end));
}
