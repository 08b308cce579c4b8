use fontdb::{Database, Family, Query};

use crate::font::{FontError, FontFace, Result};

/// Load the system's default sans-serif face through `fontdb`.
///
/// Used when no font path is configured; fails with
/// [`FontError::NoSystemFont`] on hosts without installed fonts.
pub fn load_system_default_font() -> Result<FontFace> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::SansSerif],
        ..Query::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or(FontError::NoSystemFont)?;

    log::debug!("loading system font face {:?}", id);
    db.with_face_data(id, |data, index| FontFace::from_vec(data.to_vec(), index as usize))
        .ok_or(FontError::NoSystemFont)?
}
