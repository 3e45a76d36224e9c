use std::ops::Deref;
use std::rc::Rc;

use shared::teacher_screen::{TeacherAction, TeacherDirectory};
use shared::{ListQuery, RequestTracker};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notice_timeout::use_notice_timeout;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "teacher-directory";

/// `use_reducer` adapter around the teacher screen view model
#[derive(Default, PartialEq)]
pub struct TeacherDirectoryState(TeacherDirectory);

impl Deref for TeacherDirectoryState {
    type Target = TeacherDirectory;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for TeacherDirectoryState {
    type Action = TeacherAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

pub struct UseTeacherDirectoryResult {
    pub state: UseReducerHandle<TeacherDirectoryState>,
    pub actions: UseTeacherDirectoryActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTeacherDirectoryActions {
    pub load_page: Callback<ListQuery>,
    /// Re-fetch the page currently shown
    pub refresh: Callback<()>,
    /// Validate the drawer form and create the teacher
    pub submit: Callback<()>,
    /// Plain state updates (form edits, drawer open/close, search text)
    pub dispatch: Callback<TeacherAction>,
}

#[hook]
pub fn use_teacher_directory(api_client: &ApiClient) -> UseTeacherDirectoryResult {
    let state = use_reducer(TeacherDirectoryState::default);
    let page_requests = use_mut_ref(RequestTracker::new);
    let position_requests = use_mut_ref(RequestTracker::new);
    let submit_in_flight = use_mut_ref(|| false);
    let mounted = use_mut_ref(|| true);

    let load_page = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let page_requests = page_requests.clone();

        use_callback((), move |query: ListQuery, _| {
            let ticket = page_requests.borrow_mut().issue();
            dispatcher.dispatch(TeacherAction::PageRequested { ticket });

            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let page_requests = page_requests.clone();

            spawn_local(async move {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Fetching page {} (limit {})", query.page, query.limit),
                );
                let result = api_client.list_teachers(query).await;

                if !page_requests.borrow().is_current(ticket) {
                    Logger::debug_with_component(COMPONENT, &format!("Dropping stale response for page {}", query.page));
                    return;
                }

                match result {
                    Ok(data) => {
                        dispatcher.dispatch(TeacherAction::PageLoaded { ticket, page: data });
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to fetch teachers: {}", e));
                        dispatcher.dispatch(TeacherAction::PageFailed { ticket });
                    }
                }
            });
        })
    };

    // Load the first page and the position options once per mount
    {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let load_page = load_page.clone();
        let page_requests = page_requests.clone();
        let position_requests = position_requests.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            load_page.emit(ListQuery::default());

            let ticket = position_requests.borrow_mut().issue();
            {
                let position_requests = position_requests.clone();
                spawn_local(async move {
                    let result = api_client.list_positions().await;
                    if !position_requests.borrow().is_current(ticket) {
                        return;
                    }
                    match result {
                        Ok(positions) => dispatcher.dispatch(TeacherAction::PositionsLoaded(positions)),
                        // The form still works without options, so only log
                        Err(e) => Logger::warn_with_component(COMPONENT, &format!("Failed to fetch positions: {}", e)),
                    }
                });
            }

            move || {
                *mounted.borrow_mut() = false;
                page_requests.borrow_mut().invalidate();
                position_requests.borrow_mut().invalidate();
            }
        });
    }

    let refresh = {
        let load_page = load_page.clone();
        let target = state.refresh_target();
        Callback::from(move |_: ()| load_page.emit(target))
    };

    let submit = {
        let api_client = api_client.clone();
        let state = state.clone();
        let load_page = load_page.clone();
        let submit_in_flight = submit_in_flight.clone();
        let mounted = mounted.clone();

        Callback::from(move |_: ()| {
            if *submit_in_flight.borrow() {
                return;
            }

            let request = match state.form.to_request() {
                Ok(request) => request,
                Err(errors) => {
                    state.dispatch(TeacherAction::SubmitRejected(errors));
                    return;
                }
            };

            *submit_in_flight.borrow_mut() = true;
            state.dispatch(TeacherAction::SubmitStarted);

            // Refresh whatever page was on screen when the user pressed save
            let refresh_target = state.refresh_target();
            let api_client = api_client.clone();
            let dispatcher = state.dispatcher();
            let load_page = load_page.clone();
            let submit_in_flight = submit_in_flight.clone();
            let mounted = mounted.clone();

            spawn_local(async move {
                let result = api_client.create_teacher(&request).await;
                *submit_in_flight.borrow_mut() = false;

                if !*mounted.borrow() {
                    return;
                }

                match &result {
                    Ok(Some(teacher)) => {
                        Logger::info_with_component(COMPONENT, &format!("Created teacher {}", teacher.code));
                    }
                    Ok(None) => {
                        Logger::info_with_component(COMPONENT, "Created teacher; response carried no record");
                    }
                    Err(e) => {
                        Logger::warn_with_component(COMPONENT, &format!("Failed to create teacher: {}", e));
                    }
                }

                let action = TeacherAction::create_outcome(result);
                let created = matches!(action, TeacherAction::CreateSucceeded);
                dispatcher.dispatch(action);
                if created {
                    load_page.emit(refresh_target);
                }
            });
        })
    };

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: TeacherAction| dispatcher.dispatch(action))
    };

    {
        let dispatcher = state.dispatcher();
        let notice_id = state.notices.current().map(|notice| notice.id);
        use_notice_timeout(
            notice_id,
            Callback::from(move |id| dispatcher.dispatch(TeacherAction::NoticeDismissed(id))),
        );
    }

    let actions = UseTeacherDirectoryActions {
        load_page,
        refresh,
        submit,
        dispatch,
    };

    UseTeacherDirectoryResult { state, actions }
}
