// ============================================================================
// USE LOADER HOOK - route data with abort + revalidation
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use web_sys::AbortController;
use yew::prelude::*;

use crate::error::LoaderError;
use crate::loaders::LoaderArgs;

#[derive(Debug)]
pub enum LoaderState<T> {
    Loading,
    Ready(Rc<T>),
    Failed(LoaderError),
}

impl<T> Clone for LoaderState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Ready(data) => Self::Ready(Rc::clone(data)),
            Self::Failed(err) => Self::Failed(err.clone()),
        }
    }
}

impl<T> PartialEq for LoaderState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loading, Self::Loading) => true,
            (Self::Ready(a), Self::Ready(b)) => Rc::ptr_eq(a, b),
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> LoaderState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

pub struct UseLoaderHandle<T> {
    pub state: LoaderState<T>,
    /// Re-runs the loader, keeping the current data on screen meanwhile
    pub revalidate: Callback<()>,
}

/// Runs `loader` whenever `deps` change or `revalidate` is emitted. Each
/// run gets its own abort signal; the previous run is aborted and its
/// result dropped.
#[hook]
pub fn use_loader<T, D, F, Fut>(deps: D, loader: F) -> UseLoaderHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(LoaderArgs, D) -> Fut + 'static,
    Fut: Future<Output = Result<T, LoaderError>> + 'static,
{
    let state = use_state(|| LoaderState::<T>::Loading);
    let generation = use_state(|| 0u32);
    let loaded_for = use_mut_ref(|| None::<D>);

    {
        let state = state.clone();
        let loaded_for = loaded_for.clone();
        use_effect_with((deps, *generation), move |(deps, _)| {
            // New params: stale data would belong to another page
            if loaded_for.borrow().as_ref() != Some(deps) {
                state.set(LoaderState::Loading);
            }

            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(AbortController::signal);
            let future = loader(LoaderArgs { signal: signal.clone() }, deps.clone());
            let deps = deps.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = future.await;
                if signal.as_ref().is_some_and(|s| s.aborted()) {
                    log::debug!("⏹️ Loader result discarded after abort");
                    return;
                }
                match result {
                    Ok(data) => {
                        *loaded_for.borrow_mut() = Some(deps);
                        state.set(LoaderState::Ready(Rc::new(data)));
                    }
                    Err(err) => {
                        log::error!("❌ Loader failed: {}", err);
                        *loaded_for.borrow_mut() = None;
                        state.set(LoaderState::Failed(err));
                    }
                }
            });

            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    let revalidate = {
        let generation = generation.clone();
        Callback::from(move |_: ()| generation.set(generation.wrapping_add(1)))
    };

    UseLoaderHandle {
        state: (*state).clone(),
        revalidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn ready_states_compare_by_identity() {
        let data = Rc::new(vec![1, 2, 3]);
        let a = LoaderState::Ready(Rc::clone(&data));
        assert_eq!(a.clone(), a);
        assert_ne!(a, LoaderState::Ready(Rc::new(vec![1, 2, 3])));
        assert_eq!(a.data(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn failed_state_has_no_data() {
        let err = LoaderError::Api(ApiError::Parse {
            url: "u".to_string(),
            message: "m".to_string(),
        });
        let state = LoaderState::<u8>::Failed(err.clone());
        assert_eq!(state, LoaderState::Failed(err));
        assert_eq!(state.data(), None);
    }
}
