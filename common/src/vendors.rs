use std::sync::OnceLock;

use mac_oui::Oui;
use tracing::{trace, warn};

use crate::identifier::ExtendedIdentifier;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the embedded **Organizationally unique identifier** database.
///
/// A database that fails to load is remembered as absent, so every lookup after
/// that simply finds nothing.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| {
            let db = Oui::default().ok();
            if db.is_none() {
                warn!("failed to load OUI database");
            }
            db
        })
        .as_ref()
}

/// Identify the vendor that was assigned the OUI of a unique identifier.
pub fn get_vendor(id: &ExtendedIdentifier) -> Option<String> {
    if !id.has_oui() {
        return None;
    }

    let db = get_oui_db()?;
    let mac_str = id.to_colon_notation();
    trace!(identifier = %mac_str, "looking up vendor");
    match db.lookup_by_mac(&mac_str) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
