use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Game types the panel knows colors and filter options for. Any other
/// value is still a valid `tipo_juego`.
pub const KNOWN_GAMES: [&str; 4] = ["Pokemon", "One Piece", "Yu-Gi-Oh", "Magic"];

/// Format of `fecha` as stored by the backend
pub const FECHA_FORMAT: &str = "%Y-%m-%d";

pub const UBICACION_UNSPECIFIED: &str = "No especificada";
pub const PREMIO_UNSPECIFIED: &str = "No especificado";

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tournament as listed by `GET /api/torneos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Torneo {
    /// Backend-assigned identifier, never changes once set
    pub id: i64,

    pub nombre_tienda: String,

    /// Empty when unspecified
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ubicacion: String,

    /// Free-form time of day, usually `HH:MM`
    pub hora: String,

    /// ISO date (`YYYY-MM-DD`)
    pub fecha: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub premio: String,

    pub tipo_juego: String,
    pub categoria: String,
    pub tipo_torneo: String,

    #[serde(default)]
    pub imagen: Option<String>,
}

impl Torneo {
    pub fn fecha_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.fecha.trim(), FECHA_FORMAT).ok()
    }

    /// Whether the tournament happens today or later. Unparseable dates
    /// count as past.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.fecha_date().map(|d| d >= today).unwrap_or(false)
    }

    pub fn ubicacion_display(&self) -> &str {
        if self.ubicacion.is_empty() {
            UBICACION_UNSPECIFIED
        } else {
            &self.ubicacion
        }
    }

    pub fn premio_display(&self) -> &str {
        if self.premio.is_empty() {
            PREMIO_UNSPECIFIED
        } else {
            &self.premio
        }
    }

    /// Image URL, treating an empty string like no image
    pub fn imagen_url(&self) -> Option<&str> {
        self.imagen.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, fecha: &str, ubicacion: &str) -> Torneo {
    Torneo {
        id,
        nombre_tienda: format!("Tienda {}", id),
        ubicacion: ubicacion.to_string(),
        hora: "18:00".to_string(),
        fecha: fecha.to_string(),
        premio: String::new(),
        tipo_juego: "Pokemon".to_string(),
        categoria: "Junior".to_string(),
        tipo_torneo: "League Cup".to_string(),
        imagen: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_record_with_nulls() {
        let torneo: Torneo = serde_json::from_value(json!({
            "id": 3,
            "nombre_tienda": "Trading Zone Valencia",
            "ubicacion": null,
            "hora": "18:00",
            "fecha": "2024-05-01",
            "premio": null,
            "tipo_juego": "Pokemon",
            "categoria": "Master",
            "tipo_torneo": "Liga Casual",
            "imagen": null
        }))
        .unwrap();

        assert_eq!(torneo.id, 3);
        assert_eq!(torneo.ubicacion, "");
        assert_eq!(torneo.premio, "");
        assert_eq!(torneo.imagen, None);
        assert_eq!(torneo.ubicacion_display(), UBICACION_UNSPECIFIED);
        assert_eq!(torneo.premio_display(), PREMIO_UNSPECIFIED);
    }

    #[test]
    fn test_deserialize_record_without_optional_keys() {
        let torneo: Torneo = serde_json::from_value(json!({
            "id": 1,
            "nombre_tienda": "Card Shop Madrid",
            "hora": "10:00",
            "fecha": "2024-05-02",
            "tipo_juego": "One Piece",
            "categoria": "Senior",
            "tipo_torneo": "League Cup"
        }))
        .unwrap();

        assert_eq!(torneo.ubicacion, "");
        assert_eq!(torneo.imagen_url(), None);
    }

    #[test]
    fn test_is_upcoming() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert!(sample(1, "2024-05-02", "").is_upcoming(today));
        assert!(sample(2, "2024-06-01", "").is_upcoming(today));
        assert!(!sample(3, "2024-05-01", "").is_upcoming(today));
        assert!(!sample(4, "pronto", "").is_upcoming(today));
    }

    #[test]
    fn test_empty_imagen_is_no_image() {
        let mut torneo = sample(1, "2024-05-02", "Madrid");
        torneo.imagen = Some("  ".to_string());
        assert_eq!(torneo.imagen_url(), None);
        torneo.imagen = Some("https://example.com/flyer.jpg".to_string());
        assert_eq!(torneo.imagen_url(), Some("https://example.com/flyer.jpg"));
    }
}
