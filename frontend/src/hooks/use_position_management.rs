use std::ops::Deref;
use std::rc::Rc;

use shared::position_screen::{PositionAction, PositionManagement};
use shared::RequestTracker;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notice_timeout::use_notice_timeout;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "position-management";

#[derive(Default, PartialEq)]
pub struct PositionManagementState(PositionManagement);

impl Deref for PositionManagementState {
    type Target = PositionManagement;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for PositionManagementState {
    type Action = PositionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

pub struct UsePositionManagementResult {
    pub state: UseReducerHandle<PositionManagementState>,
    pub actions: UsePositionManagementActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePositionManagementActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub dispatch: Callback<PositionAction>,
}

#[hook]
pub fn use_position_management(api_client: &ApiClient) -> UsePositionManagementResult {
    let state = use_reducer(PositionManagementState::default);
    let requests = use_mut_ref(RequestTracker::new);
    let submit_in_flight = use_mut_ref(|| false);
    let mounted = use_mut_ref(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let requests = requests.clone();

        use_callback((), move |_: (), _| {
            let ticket = requests.borrow_mut().issue();
            dispatcher.dispatch(PositionAction::LoadRequested { ticket });

            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let requests = requests.clone();

            spawn_local(async move {
                let result = api_client.list_positions().await;

                if !requests.borrow().is_current(ticket) {
                    Logger::debug_with_component(COMPONENT, "Dropping stale position list response");
                    return;
                }

                match result {
                    Ok(positions) => {
                        Logger::debug_with_component(COMPONENT, &format!("Loaded {} positions", positions.len()));
                        dispatcher.dispatch(PositionAction::Loaded { ticket, positions });
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to fetch positions: {}", e));
                        dispatcher.dispatch(PositionAction::LoadFailed { ticket });
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        let requests = requests.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            move || {
                *mounted.borrow_mut() = false;
                requests.borrow_mut().invalidate();
            }
        });
    }

    let submit = {
        let api_client = api_client.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        let submit_in_flight = submit_in_flight.clone();
        let mounted = mounted.clone();

        Callback::from(move |_: ()| {
            if *submit_in_flight.borrow() {
                return;
            }

            let request = match state.form.to_request() {
                Ok(request) => request,
                Err(errors) => {
                    state.dispatch(PositionAction::SubmitRejected(errors));
                    return;
                }
            };

            *submit_in_flight.borrow_mut() = true;
            state.dispatch(PositionAction::SubmitStarted);

            let api_client = api_client.clone();
            let dispatcher = state.dispatcher();
            let refresh = refresh.clone();
            let submit_in_flight = submit_in_flight.clone();
            let mounted = mounted.clone();

            spawn_local(async move {
                let result = api_client.create_position(&request).await;
                *submit_in_flight.borrow_mut() = false;

                if !*mounted.borrow() {
                    return;
                }

                match &result {
                    Ok(Some(position)) => {
                        Logger::info_with_component(COMPONENT, &format!("Created position {}", position.code));
                    }
                    Ok(None) => {
                        Logger::info_with_component(COMPONENT, "Created position; response carried no record");
                    }
                    Err(e) => {
                        Logger::warn_with_component(COMPONENT, &format!("Failed to create position: {}", e));
                    }
                }

                let action = PositionAction::create_outcome(result);
                let created = matches!(action, PositionAction::CreateSucceeded);
                dispatcher.dispatch(action);
                if created {
                    refresh.emit(());
                }
            });
        })
    };

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: PositionAction| dispatcher.dispatch(action))
    };

    {
        let dispatcher = state.dispatcher();
        let notice_id = state.notices.current().map(|notice| notice.id);
        use_notice_timeout(
            notice_id,
            Callback::from(move |id| dispatcher.dispatch(PositionAction::NoticeDismissed(id))),
        );
    }

    let actions = UsePositionManagementActions {
        refresh,
        submit,
        dispatch,
    };

    UsePositionManagementResult { state, actions }
}
