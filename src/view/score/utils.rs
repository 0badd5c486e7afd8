use crate::view::score::types::ParSign;

/// Signed one-decimal vs-par, with golf's "E" for dead even.
#[must_use]
pub fn format_vs_par(vs_par: f64) -> String {
    if vs_par > 0.0 {
        format!("+{vs_par:.1}")
    } else if vs_par < 0.0 {
        format!("{vs_par:.1}")
    } else {
        "E".to_string()
    }
}

#[must_use]
pub fn sign_shape(sign: ParSign) -> &'static str {
    match sign {
        ParSign::Under => "◆",
        ParSign::Even => "●",
        ParSign::Over => "▲",
    }
}
