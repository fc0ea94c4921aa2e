mod suggestion_handler;

pub use suggestion_handler::{
    __path_suggest_for_draft, __path_suggest_for_ticket, suggest_for_draft, suggest_for_ticket,
};
