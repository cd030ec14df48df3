/// Run a generic per-variant function for a resolved [`TaskKind`].
///
/// [`TaskKind`]: tale_core::enums::TaskKind
macro_rules! for_task {
    ($kind:expr, $run:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            tale_core::enums::TaskKind::Interaction => $run::<tale_forms::Interaction>($($arg),*),
            tale_core::enums::TaskKind::Description => $run::<tale_forms::Description>($($arg),*),
            tale_core::enums::TaskKind::Safety => $run::<tale_forms::Safety>($($arg),*),
        }
    };
}

pub mod assemble;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod submit;
pub mod template;
pub mod validate;
