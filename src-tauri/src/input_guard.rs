use serde::Serialize;

/// A keyboard chord matched against `KeyboardEvent.code` and exact modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct KeyChord {
    pub(crate) code: &'static str,
    pub(crate) ctrl: bool,
    pub(crate) shift: bool,
    pub(crate) alt: bool,
    pub(crate) meta: bool,
}

const fn chord(code: &'static str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> KeyChord {
    KeyChord {
        code,
        ctrl,
        shift,
        alt,
        meta,
    }
}

/// Developer-tools and view-source shortcuts blocked inside the main window.
pub(crate) const SUPPRESSED_CHORDS: &[KeyChord] = &[
    chord("F12", false, false, false, false),
    chord("KeyI", true, true, false, false),
    chord("KeyJ", true, true, false, false),
    chord("KeyC", true, true, false, false),
    chord("KeyU", true, false, false, false),
    chord("KeyI", false, false, true, true),
    chord("KeyJ", false, false, true, true),
    chord("KeyC", false, false, true, true),
    chord("KeyU", false, false, true, true),
];

pub(crate) fn keyboard_guard_script() -> String {
    let chords = serde_json::to_string(SUPPRESSED_CHORDS).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
(function () {{
  if (window.__flashShellKeyGuard) return;
  window.__flashShellKeyGuard = true;
  var chords = {chords};
  window.addEventListener('keydown', function (event) {{
    for (var i = 0; i < chords.length; i++) {{
      var chord = chords[i];
      if (chord.code === event.code &&
          chord.ctrl === event.ctrlKey &&
          chord.shift === event.shiftKey &&
          chord.alt === event.altKey &&
          chord.meta === event.metaKey) {{
        event.preventDefault();
        event.stopPropagation();
        return;
      }}
    }}
  }}, true);
}})();
"#
    )
}
