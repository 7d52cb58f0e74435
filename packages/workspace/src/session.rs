//! # Editor Session
//!
//! One mounted editor: the synchronous engine plus the asynchronous
//! persistence boundary.
//!
//! Save and publish are fire-and-forget. The engine never blocks on the
//! gateway and never rolls back in-memory state when a call fails; the
//! outcome is reported on the session's event channel for the UI to
//! surface.

use std::sync::Arc;

use broadsheet_editor::BlueprintEditor;
use broadsheet_gateway::{AuditRecord, GatewayError, PersistenceGateway};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Outcome notifications for the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    DraftSaved { layout_id: String },
    SaveFailed { reason: String },
    Published { layout_id: String },
    PublishFailed { reason: String },
}

/// A mounted editing session over one blueprint.
pub struct EditorSession {
    editor: BlueprintEditor,
    gateway: Arc<dyn PersistenceGateway>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl EditorSession {
    /// Create a session and the event stream its UI should subscribe to.
    pub fn new(
        gateway: Arc<dyn PersistenceGateway>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = Self {
            editor: BlueprintEditor::new(),
            gateway,
            events,
        };
        (session, receiver)
    }

    /// Load the active layout into the editor, seeding the placeholder
    /// canvas when the storage side has nothing yet. A gateway failure
    /// leaves the editor on a valid empty canvas and is returned for the
    /// UI to report.
    pub async fn mount(&mut self) -> Result<(), GatewayError> {
        match self.gateway.load_active().await {
            Ok(stored) => {
                self.editor
                    .load_or_default(stored.map(|saved| saved.structure));
                info!("editor mounted with {} blocks", self.editor.layout().len());
                Ok(())
            }
            Err(err) => {
                error!("failed to load active blueprint: {err}");
                Err(err)
            }
        }
    }

    pub fn editor(&self) -> &BlueprintEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut BlueprintEditor {
        &mut self.editor
    }

    /// Persist the current layout under `name` without blocking the
    /// editor. The layout is captured at call time; later edits do not
    /// leak into the draft.
    pub fn save_draft(&self, name: &str) {
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        let name = name.to_string();
        let layout = self.editor.layout().clone();

        tokio::spawn(async move {
            match gateway.save_draft(&name, &layout).await {
                Ok(layout_id) => {
                    info!("draft {name:?} saved as {layout_id}");
                    let _ = events.send(SessionEvent::DraftSaved { layout_id });
                }
                Err(err) => {
                    warn!("saving draft {name:?} failed: {err}");
                    let _ = events.send(SessionEvent::SaveFailed {
                        reason: err.to_string(),
                    });
                }
            }
        });
    }

    /// Promote a previously saved layout to active without blocking the
    /// editor.
    pub fn publish(&self, layout_id: &str) {
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        let layout_id = layout_id.to_string();

        tokio::spawn(async move {
            match gateway.publish(&layout_id).await {
                Ok(()) => {
                    info!("layout {layout_id} published");
                    let _ = events.send(SessionEvent::Published { layout_id });
                }
                Err(err) => {
                    warn!("publishing {layout_id} failed: {err}");
                    let _ = events.send(SessionEvent::PublishFailed {
                        reason: err.to_string(),
                    });
                }
            }
        });
    }

    /// Audit trail passthrough for the history screen.
    pub async fn audit_history(
        &self,
        layout_id: &str,
    ) -> Result<Vec<AuditRecord>, GatewayError> {
        self.gateway.fetch_audit_history(layout_id).await
    }
}
