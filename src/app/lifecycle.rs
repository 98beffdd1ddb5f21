//! Application lifecycle - construction and the initial paint.

use super::{MazeApp, Session, default_dispatcher};
use crate::error::AppError;
use crate::settings::Settings;
use crate::view::View;

impl<V: View> MazeApp<V> {
    /// Build the session from `settings`, register the routes and push the
    /// picker contents, the Idle affordances and a blank grid to `view`.
    pub fn new(settings: &Settings, mut view: V) -> Result<Self, AppError> {
        let session = Session::new(settings)?;
        let dispatcher = default_dispatcher()?;

        session.populate_pickers(&mut view);
        session.refresh_affordances(&mut view);
        session.render(&mut view);

        tracing::info!(
            size = session.size(),
            algorithm = %session.algorithm().name,
            apply_mask = session.apply_mask(),
            "maze app ready"
        );

        Ok(Self {
            session,
            dispatcher,
            view,
        })
    }
}
