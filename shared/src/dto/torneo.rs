use crate::models::torneo::Torneo;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/torneos` and `PUT /api/torneos/{id}`: a torneo
/// without its identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct TorneoPayload {
    #[validate(length(min = 1, message = "Store name is required"))]
    pub nombre_tienda: String,

    pub ubicacion: String,

    /// Free-form, not restricted to `HH:MM`
    #[validate(length(min = 1, message = "Time is required"))]
    pub hora: String,

    #[validate(length(min = 1, message = "Date is required"))]
    pub fecha: String,

    pub premio: String,

    #[validate(length(min = 1, message = "Game type is required"))]
    pub tipo_juego: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub categoria: String,

    #[validate(length(min = 1, message = "Tournament type is required"))]
    pub tipo_torneo: String,

    /// Empty string means no image; the backend stores it as null
    pub imagen: String,
}

impl From<&Torneo> for TorneoPayload {
    fn from(torneo: &Torneo) -> Self {
        Self {
            nombre_tienda: torneo.nombre_tienda.clone(),
            ubicacion: torneo.ubicacion.clone(),
            hora: torneo.hora.clone(),
            fecha: torneo.fecha.clone(),
            premio: torneo.premio.clone(),
            tipo_juego: torneo.tipo_juego.clone(),
            categoria: torneo.categoria.clone(),
            tipo_torneo: torneo.tipo_torneo.clone(),
            imagen: torneo.imagen.clone().unwrap_or_default(),
        }
    }
}

impl TorneoPayload {
    /// Validates the payload before it is sent
    pub fn validated(self) -> crate::Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::torneo::sample;
    use crate::SharedError;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn valid_payload() -> TorneoPayload {
        TorneoPayload::from(&sample(7, "2024-05-01", "Madrid"))
    }

    #[test]
    fn test_payload_from_torneo_drops_id_and_flattens_imagen() {
        let mut torneo = sample(7, "2024-05-01", "Madrid");
        torneo.imagen = None;
        let payload = TorneoPayload::from(&torneo);

        assert_eq!(payload.nombre_tienda, "Tienda 7");
        assert_eq!(payload.imagen, "");
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["imagen"], "");
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validated().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut payload = valid_payload();
        payload.ubicacion.clear();
        payload.premio.clear();
        payload.imagen.clear();
        assert!(payload.validated().is_ok());
    }

    #[test_case(|p: &mut TorneoPayload| p.hora = "18:00 h".to_string() ; "time with suffix")]
    #[test_case(|p: &mut TorneoPayload| p.tipo_torneo = "Liga Competitiva Regional Abierta".to_string() ; "long tournament type")]
    #[test_case(|p: &mut TorneoPayload| p.categoria = "Categoria Libre Sin Restricciones".to_string() ; "long category")]
    fn test_free_form_values_are_accepted(mutate: fn(&mut TorneoPayload)) {
        let mut payload = valid_payload();
        mutate(&mut payload);
        assert!(payload.validated().is_ok());
    }

    #[test_case(|p: &mut TorneoPayload| p.nombre_tienda.clear() ; "missing store name")]
    #[test_case(|p: &mut TorneoPayload| p.hora.clear() ; "missing time")]
    #[test_case(|p: &mut TorneoPayload| p.fecha.clear() ; "missing date")]
    #[test_case(|p: &mut TorneoPayload| p.tipo_juego.clear() ; "missing game")]
    #[test_case(|p: &mut TorneoPayload| p.categoria.clear() ; "missing category")]
    #[test_case(|p: &mut TorneoPayload| p.tipo_torneo.clear() ; "missing tournament type")]
    fn test_invalid_payload_is_rejected(mutate: fn(&mut TorneoPayload)) {
        let mut payload = valid_payload();
        mutate(&mut payload);
        assert!(matches!(payload.validated(), Err(SharedError::Validation(_))));
    }
}
