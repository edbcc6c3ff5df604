// Crate entry point. Declares the module tree so the binary and tests can import it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// Layers
// - core: entities, pure booking decisions, store ports.
// - application: use case handlers, errors, response views.
// - adapters: the in-memory store and the HTTP inbound adapter.
// - shell: config, state wiring, router.

pub mod core {
    pub mod booking;
    pub mod clock;
    pub mod comment;
    pub mod item;
    pub mod pagination;
    pub mod ports;
    pub mod request;
    pub mod user;
}

pub mod application {
    pub mod errors;
    pub mod views {
        pub mod booking_view;
        pub mod item_view;
        pub mod request_view;
        pub mod user_view;
    }
    pub mod command_handlers {
        pub mod add_booking_handler;
        pub mod add_comment_handler;
        pub mod approve_booking_handler;
        pub mod create_request_handler;
        pub mod item_command_handler;
        pub mod user_command_handler;
    }
    pub mod query_handlers {
        pub mod booking_queries;
        pub mod booking_summary_projector;
        pub mod item_queries;
        pub mod request_queries;
        pub mod user_queries;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_entity_store;
    }
    pub mod inbound {
        pub mod http {
            pub mod bookings;
            pub mod caller;
            pub mod http_error;
            pub mod items;
            pub mod requests;
            pub mod users;
            pub mod validation;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
