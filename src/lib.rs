// Crate entry point. Declares every module so tests and the binary can reach them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod infrastructure {
        pub mod chat_transport;
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod chat_scope;
            pub mod event_record;
            pub mod store_document;
            pub mod temporal_status;
        }
        pub mod use_cases {
            pub mod add_event {
                pub mod handler;
                pub mod submission;
            }
            pub mod query_events {
                pub mod chronology;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod chat;
                pub mod replies;
                pub mod webhook;
            }
        }
    }
}

pub mod shell;
