use contracts::domain::common::EntityId;

/// Сессия редактирования одной строки.
///
/// `Creating` держит черновик новой сущности, `Editing` черновик
/// существующей. Одновременно активна только одна сессия.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<D> {
    Creating(D),
    Editing { id: EntityId, draft: D },
}

/// Какой запрос сохранения был отправлен
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent<D> {
    /// Начать редактирование строки; допустимо из любого состояния
    StartEdit { id: EntityId, draft: D },
    Cancel,
    /// Сервер подтвердил сохранение
    Committed(SaveTarget),
    /// Сервер подтвердил удаление строки
    Deleted(EntityId),
}

impl<D: Default> Default for EditSession<D> {
    fn default() -> Self {
        EditSession::Creating(D::default())
    }
}

impl<D: Default> EditSession<D> {
    /// Чистая функция перехода.
    ///
    /// `StartEdit` молча отбрасывает текущий черновик, даже несохранённый.
    /// `Committed` и `Deleted` сбрасывают форму только если она всё ещё
    /// относится к той строке, которой касался ответ.
    pub fn apply(self, event: SessionEvent<D>) -> Self {
        match (self, event) {
            (_, SessionEvent::StartEdit { id, draft }) => EditSession::Editing { id, draft },
            (_, SessionEvent::Cancel) => EditSession::default(),
            (EditSession::Creating(_), SessionEvent::Committed(SaveTarget::Create)) => {
                EditSession::default()
            }
            (EditSession::Editing { id, draft }, SessionEvent::Committed(SaveTarget::Update(saved))) => {
                if id == saved {
                    EditSession::default()
                } else {
                    EditSession::Editing { id, draft }
                }
            }
            (EditSession::Editing { id, draft }, SessionEvent::Deleted(deleted)) => {
                if id == deleted {
                    EditSession::default()
                } else {
                    EditSession::Editing { id, draft }
                }
            }
            (session, _) => session,
        }
    }

    pub fn draft(&self) -> &D {
        match self {
            EditSession::Creating(draft) => draft,
            EditSession::Editing { draft, .. } => draft,
        }
    }

    pub fn draft_mut(&mut self) -> &mut D {
        match self {
            EditSession::Creating(draft) => draft,
            EditSession::Editing { draft, .. } => draft,
        }
    }

    pub fn editing_id(&self) -> Option<&EntityId> {
        match self {
            EditSession::Creating(_) => None,
            EditSession::Editing { id, .. } => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Session = EditSession<String>;

    fn start(id: &str, draft: &str) -> SessionEvent<String> {
        SessionEvent::StartEdit {
            id: EntityId::from(id),
            draft: draft.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_empty_create() {
        let s = Session::default();
        assert!(!s.is_editing());
        assert_eq!(s.draft(), "");
    }

    #[test]
    fn test_start_edit_while_editing_discards_previous_draft() {
        let mut s = Session::default().apply(start("9", "Kochi"));
        s.draft_mut().push_str(" (unsaved)");

        let s = s.apply(start("10", "Thrissur"));

        assert_eq!(s.editing_id(), Some(&EntityId::from("10")));
        assert_eq!(s.draft(), "Thrissur");
    }

    #[test]
    fn test_start_edit_discards_create_draft() {
        let mut s = Session::default();
        *s.draft_mut() = "half typed".into();
        let s = s.apply(start("1", "Kerala")).apply(SessionEvent::Cancel);
        assert_eq!(s, Session::default());
    }

    #[test]
    fn test_commit_create_clears_fields_and_stays_creating() {
        let s = Session::Creating("Kerala".into()).apply(SessionEvent::Committed(SaveTarget::Create));
        assert_eq!(s, Session::default());
    }

    #[test]
    fn test_commit_update_returns_to_creating() {
        let s = Session::default()
            .apply(start("9", "New Kochi"))
            .apply(SessionEvent::Committed(SaveTarget::Update(EntityId::from("9"))));
        assert_eq!(s, Session::default());
    }

    #[test]
    fn test_commit_for_other_row_keeps_newer_session() {
        // update for 9 lands after the user already moved on to 10
        let s = Session::default()
            .apply(start("10", "Thrissur"))
            .apply(SessionEvent::Committed(SaveTarget::Update(EntityId::from("9"))));
        assert_eq!(s.editing_id(), Some(&EntityId::from("10")));

        let s = s.apply(SessionEvent::Committed(SaveTarget::Create));
        assert_eq!(s.draft(), "Thrissur");
    }

    #[test]
    fn test_deleting_edited_row_cancels_session() {
        let s = Session::default()
            .apply(start("9", "Kochi"))
            .apply(SessionEvent::Deleted(EntityId::from("9")));
        assert_eq!(s, Session::default());
    }

    #[test]
    fn test_deleting_other_row_keeps_session() {
        let s = Session::default()
            .apply(start("9", "Kochi"))
            .apply(SessionEvent::Deleted(EntityId::from("10")));
        assert_eq!(s.editing_id(), Some(&EntityId::from("9")));
        assert_eq!(s.draft(), "Kochi");

        let mut creating = Session::default();
        *creating.draft_mut() = "typing".into();
        let creating = creating.apply(SessionEvent::Deleted(EntityId::from("1")));
        assert_eq!(creating.draft(), "typing");
    }
}
