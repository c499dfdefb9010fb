use crate::error::TrainerError;
use crate::session::TrainerView;

const CELL: usize = 3;

/// Render a view as plain text: a header, the scale, and the keyboard with fingers.
///
/// Each key is a three-column cell. Fingers on the parent major tonic are
/// bracketed, marking where the major-scale fingering starts over.
pub fn to_text(view: &TrainerView) -> String {
    let mut out = String::new();

    let Some(selection) = view.selection else {
        out.push_str("No scale selected\n");
        out.push_str(&keyboard_rows(view));
        return out;
    };

    out.push_str(&format!("{} ({} hand)\n", view.title, selection.hand));

    let notes: Vec<&str> = view.scale_notes.iter().map(|p| p.display_name()).collect();
    out.push_str(&format!("Scale:   {}\n", notes.join(" ")));

    if let Some(fingers) = &view.fingers {
        let digits: Vec<String> = fingers.fingers().iter().map(|f| f.to_string()).collect();
        out.push_str(&format!("Fingers: {}\n", digits.join(" ")));
    }
    if let Some(parent) = view.parent_key {
        out.push_str(&format!("Parent:  {} Ionian\n", parent));
    }
    out.push('\n');
    out.push_str(&keyboard_rows(view));
    out
}

fn keyboard_rows(view: &TrainerView) -> String {
    let mut names = String::new();
    let mut keys = String::new();
    let mut fingers = String::new();

    for (index, pitch) in view.layout.keys().iter().enumerate() {
        names.push_str(&pad(pitch.display_name()));
        keys.push_str(if pitch.is_black() { " █ " } else { " │ " });

        let cell = match view.positions.iter().find(|p| p.index == index) {
            Some(p) if p.is_parent_tonic => format!("[{}]", p.finger),
            Some(p) => format!(" {} ", p.finger),
            None => " ".repeat(CELL),
        };
        fingers.push_str(&cell);
    }

    let mut out = String::new();
    for row in [names, keys, fingers] {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Left-align a note name in one cell, counting chars rather than bytes.
fn pad(name: &str) -> String {
    let width = name.chars().count();
    format!(" {}{}", name, " ".repeat(CELL.saturating_sub(width + 1)))
}

/// Render a view as pretty-printed JSON.
pub fn to_json(view: &TrainerView) -> Result<String, TrainerError> {
    serde_json::to_string_pretty(view).map_err(|e| TrainerError::SerializeError(e.to_string()))
}

/// Render several views as one pretty-printed JSON array.
pub fn to_json_list(views: &[TrainerView]) -> Result<String, TrainerError> {
    serde_json::to_string_pretty(views).map_err(|e| TrainerError::SerializeError(e.to_string()))
}
