use shared::{Result, Torneo, TorneoPayload};

/// Where the create/edit modal is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    CreatingNew,
    Editing(i64),
}

/// Inputs of the modal form, keyed by the same names as the DOM inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TorneoField {
    NombreTienda,
    Ubicacion,
    Hora,
    Fecha,
    Premio,
    TipoJuego,
    Categoria,
    TipoTorneo,
    Imagen,
}

impl TorneoField {
    pub const ALL: [TorneoField; 9] = [
        TorneoField::NombreTienda,
        TorneoField::Ubicacion,
        TorneoField::Hora,
        TorneoField::Fecha,
        TorneoField::Premio,
        TorneoField::TipoJuego,
        TorneoField::Categoria,
        TorneoField::TipoTorneo,
        TorneoField::Imagen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TorneoField::NombreTienda => "nombre_tienda",
            TorneoField::Ubicacion => "ubicacion",
            TorneoField::Hora => "hora",
            TorneoField::Fecha => "fecha",
            TorneoField::Premio => "premio",
            TorneoField::TipoJuego => "tipo_juego",
            TorneoField::Categoria => "categoria",
            TorneoField::TipoTorneo => "tipo_torneo",
            TorneoField::Imagen => "imagen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TorneoField::NombreTienda => "Tienda",
            TorneoField::Ubicacion => "Ubicación",
            TorneoField::Hora => "Hora",
            TorneoField::Fecha => "Fecha",
            TorneoField::Premio => "Premio",
            TorneoField::TipoJuego => "Juego",
            TorneoField::Categoria => "Categoría",
            TorneoField::TipoTorneo => "Tipo de torneo",
            TorneoField::Imagen => "Imagen (URL)",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            TorneoField::Hora => "time",
            TorneoField::Fecha => "date",
            TorneoField::Imagen => "url",
            _ => "text",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(
            self,
            TorneoField::Ubicacion | TorneoField::Premio | TorneoField::Imagen
        )
    }
}

/// What a submit should send
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(TorneoPayload),
    Update(i64, TorneoPayload),
}

/// Open/edit/close state of the torneo modal and the values of its inputs.
///
/// Network calls are made by the caller; this type only decides what to send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormController {
    mode: FormMode,
    fields: TorneoPayload,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Editar Torneo",
            _ => "Crear Nuevo Torneo",
        }
    }

    /// Identifier carried by the form, present only while editing
    pub fn current_id(&self) -> Option<i64> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn open_for_create(&mut self) {
        self.fields = TorneoPayload::default();
        self.mode = FormMode::CreatingNew;
    }

    pub fn open_for_edit(&mut self, torneo: &Torneo) {
        self.fields = TorneoPayload::from(torneo);
        self.mode = FormMode::Editing(torneo.id);
    }

    pub fn close(&mut self) {
        self.fields = TorneoPayload::default();
        self.mode = FormMode::Closed;
    }

    /// Click on the modal: only clicks on the backdrop itself close it.
    /// Returns whether the form was closed.
    pub fn dismiss(&mut self, target_is_backdrop: bool) -> bool {
        if !target_is_backdrop || !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    pub fn value(&self, field: TorneoField) -> &str {
        match field {
            TorneoField::NombreTienda => &self.fields.nombre_tienda,
            TorneoField::Ubicacion => &self.fields.ubicacion,
            TorneoField::Hora => &self.fields.hora,
            TorneoField::Fecha => &self.fields.fecha,
            TorneoField::Premio => &self.fields.premio,
            TorneoField::TipoJuego => &self.fields.tipo_juego,
            TorneoField::Categoria => &self.fields.categoria,
            TorneoField::TipoTorneo => &self.fields.tipo_torneo,
            TorneoField::Imagen => &self.fields.imagen,
        }
    }

    pub fn set_value(&mut self, field: TorneoField, value: String) {
        let slot = match field {
            TorneoField::NombreTienda => &mut self.fields.nombre_tienda,
            TorneoField::Ubicacion => &mut self.fields.ubicacion,
            TorneoField::Hora => &mut self.fields.hora,
            TorneoField::Fecha => &mut self.fields.fecha,
            TorneoField::Premio => &mut self.fields.premio,
            TorneoField::TipoJuego => &mut self.fields.tipo_juego,
            TorneoField::Categoria => &mut self.fields.categoria,
            TorneoField::TipoTorneo => &mut self.fields.tipo_torneo,
            TorneoField::Imagen => &mut self.fields.imagen,
        };
        *slot = value;
    }

    /// Reads the inputs into the request a submit has to send
    pub fn submit_request(&self) -> Result<SubmitRequest> {
        let payload = self.fields.clone().validated()?;
        Ok(match self.mode {
            FormMode::Editing(id) => SubmitRequest::Update(id, payload),
            _ => SubmitRequest::Create(payload),
        })
    }
}
