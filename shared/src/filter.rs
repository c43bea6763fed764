use crate::models::torneo::Torneo;
use serde::{Deserialize, Serialize};

/// User-selected predicates over the torneo list. An empty field places no
/// constraint. Field names on the wire match the `/api/filtrar` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorneoFilter {
    #[serde(rename = "filtro-fecha", default)]
    pub fecha: String,
    #[serde(rename = "filtro-ubicacion", default)]
    pub ubicacion: String,
    #[serde(rename = "filtro-juego", default)]
    pub juego: String,
}

/// What the grid should show after filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    /// No predicate was active, the whole collection in cache order
    All(Vec<&'a Torneo>),
    /// At least one predicate was active and some records matched
    Matched(Vec<&'a Torneo>),
    /// At least one predicate was active and nothing matched
    NoMatches,
}

impl<'a> FilterOutcome<'a> {
    pub fn records(&self) -> &[&'a Torneo] {
        match self {
            FilterOutcome::All(records) | FilterOutcome::Matched(records) => records,
            FilterOutcome::NoMatches => &[],
        }
    }
}

impl TorneoFilter {
    pub fn new(fecha: impl Into<String>, ubicacion: impl Into<String>) -> Self {
        Self {
            fecha: fecha.into(),
            ubicacion: ubicacion.into(),
            juego: String::new(),
        }
    }

    pub fn with_juego(mut self, juego: impl Into<String>) -> Self {
        self.juego = juego.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fecha.is_empty() && self.ubicacion.is_empty() && self.juego.is_empty()
    }

    pub fn matches(&self, torneo: &Torneo) -> bool {
        (self.fecha.is_empty() || torneo.fecha == self.fecha)
            && (self.ubicacion.is_empty() || torneo.ubicacion == self.ubicacion)
            && (self.juego.is_empty() || torneo.tipo_juego == self.juego)
    }

    /// Order-preserving subsequence of `torneos` satisfying every active predicate
    pub fn apply<'a>(&self, torneos: &'a [Torneo]) -> FilterOutcome<'a> {
        if self.is_empty() {
            return FilterOutcome::All(torneos.iter().collect());
        }

        let matched: Vec<&Torneo> = torneos.iter().filter(|t| self.matches(t)).collect();
        if matched.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matched(matched)
        }
    }

    /// Same filter without the date constraint
    pub fn without_fecha(&self) -> Self {
        Self {
            fecha: String::new(),
            ..self.clone()
        }
    }

    /// Query string for `/api/filtrar`. All three parameters are always present.
    pub fn to_query(&self) -> String {
        format!(
            "filtro-fecha={}&filtro-ubicacion={}&filtro-juego={}",
            urlencoding::encode(&self.fecha),
            urlencoding::encode(&self.ubicacion),
            urlencoding::encode(&self.juego)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::torneo::sample;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(outcome: &FilterOutcome<'_>) -> Vec<i64> {
        outcome.records().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_by_date_picks_second_record() {
        let torneos = vec![sample(1, "2024-05-01", "Madrid"), sample(2, "2024-05-02", "Madrid")];
        let outcome = TorneoFilter::new("2024-05-02", "").apply(&torneos);
        assert_eq!(outcome, FilterOutcome::Matched(vec![&torneos[1]]));
    }

    #[test]
    fn test_filter_by_date_and_location() {
        let torneos = vec![
            sample(1, "2024-05-01", "Madrid"),
            sample(2, "2024-05-01", "Bilbao"),
            sample(3, "2024-05-02", "Madrid"),
            sample(4, "2024-05-01", "Madrid"),
        ];
        let outcome = TorneoFilter::new("2024-05-01", "Madrid").apply(&torneos);
        assert_eq!(ids(&outcome), vec![1, 4]);
    }

    #[test]
    fn test_no_filter_is_distinct_from_no_matches() {
        let empty: Vec<Torneo> = Vec::new();
        assert_eq!(TorneoFilter::default().apply(&empty), FilterOutcome::All(vec![]));

        let torneos = vec![sample(1, "2024-05-01", "Madrid")];
        assert_eq!(
            TorneoFilter::new("", "Sevilla").apply(&torneos),
            FilterOutcome::NoMatches
        );
    }

    #[test]
    fn test_filter_by_game() {
        let mut one_piece = sample(2, "2024-05-01", "Bilbao");
        one_piece.tipo_juego = "One Piece".to_string();
        let torneos = vec![sample(1, "2024-05-01", "Madrid"), one_piece];

        let outcome = TorneoFilter::default().with_juego("One Piece").apply(&torneos);
        assert_eq!(ids(&outcome), vec![2]);
    }

    #[test]
    fn test_query_always_carries_three_parameters() {
        assert_eq!(
            TorneoFilter::default().to_query(),
            "filtro-fecha=&filtro-ubicacion=&filtro-juego="
        );
        assert_eq!(
            TorneoFilter::new("2024-05-01", "San Sebastián").with_juego("One Piece").to_query(),
            "filtro-fecha=2024-05-01&filtro-ubicacion=San%20Sebasti%C3%A1n&filtro-juego=One%20Piece"
        );
    }

    #[test]
    fn test_without_fecha_keeps_other_predicates() {
        let filter = TorneoFilter::new("2024-05-01", "Madrid").with_juego("Magic");
        assert_eq!(
            filter.without_fecha(),
            TorneoFilter::new("", "Madrid").with_juego("Magic")
        );
    }

    fn torneo_strategy() -> impl Strategy<Value = Torneo> {
        (
            0i64..1000,
            prop::sample::select(vec!["2024-05-01", "2024-05-02", "2024-05-03"]),
            prop::sample::select(vec!["", "Madrid", "Bilbao"]),
        )
            .prop_map(|(id, fecha, ubicacion)| sample(id, fecha, ubicacion))
    }

    proptest! {
        #[test]
        fn prop_filter_is_order_preserving_subsequence(
            torneos in prop::collection::vec(torneo_strategy(), 0..20),
            fecha in prop::sample::select(vec!["", "2024-05-01", "2024-05-02"]),
            ubicacion in prop::sample::select(vec!["", "Madrid", "Sevilla"]),
        ) {
            let filter = TorneoFilter::new(fecha, ubicacion);
            let outcome = filter.apply(&torneos);

            let expected: Vec<&Torneo> = torneos
                .iter()
                .filter(|t| (fecha.is_empty() || t.fecha == fecha)
                    && (ubicacion.is_empty() || t.ubicacion == ubicacion))
                .collect();
            prop_assert_eq!(outcome.records(), expected.as_slice());
        }

        #[test]
        fn prop_no_filter_is_identity(torneos in prop::collection::vec(torneo_strategy(), 0..20)) {
            let outcome = TorneoFilter::default().apply(&torneos);
            let expected: Vec<&Torneo> = torneos.iter().collect();
            prop_assert_eq!(outcome, FilterOutcome::All(expected));
        }
    }
}
