// ============================================================================
// DELETE FLOW - Confirmación en dos pasos antes de borrar una sesión
// ============================================================================
// Idle -> Confirming (pedir) -> Deleting (confirmar) -> Idle (terminar)
// Confirming -> Idle (cancelar)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionStage {
    #[default]
    Idle,
    Confirming,
    /// Petición de borrado en vuelo; el diálogo sigue abierto
    Deleting,
}

/// Borrado pendiente. El diálogo de confirmación lee el id de aquí,
/// nunca de lo que se pasó al pedir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingDeletion {
    session_id: Option<i64>,
    stage: DeletionStage,
}

impl PendingDeletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> DeletionStage {
        self.stage
    }

    pub fn session_id(&self) -> Option<i64> {
        self.session_id
    }

    /// El diálogo se muestra mientras se confirma o se borra
    pub fn is_open(&self) -> bool {
        self.stage != DeletionStage::Idle
    }

    pub fn is_deleting(&self) -> bool {
        self.stage == DeletionStage::Deleting
    }

    /// Selecciona la sesión a borrar. Una segunda petición mientras se
    /// confirma reemplaza el objetivo; durante el borrado se ignora.
    pub fn request(&mut self, session_id: i64) -> bool {
        match self.stage {
            DeletionStage::Deleting => {
                log::warn!("⚠️ [DELETE] Borrado en curso, se ignora la petición para #{}", session_id);
                false
            }
            DeletionStage::Idle | DeletionStage::Confirming => {
                self.session_id = Some(session_id);
                self.stage = DeletionStage::Confirming;
                true
            }
        }
    }

    pub fn cancel(&mut self) -> bool {
        if self.stage != DeletionStage::Confirming {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Pasa a `Deleting` y devuelve el id guardado.
    /// Sin selección previa no hay nada que confirmar.
    pub fn confirm(&mut self) -> Option<i64> {
        match (self.stage, self.session_id) {
            (DeletionStage::Confirming, Some(id)) => {
                self.stage = DeletionStage::Deleting;
                Some(id)
            }
            _ => None,
        }
    }

    /// Cierra el diálogo tras la respuesta del servidor, sea cual sea
    pub fn finish(&mut self) {
        *self = Self::default();
    }
}
