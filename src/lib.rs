pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod dates;
            pub mod fields;
            pub mod record;
        }
        pub mod use_cases {
            pub mod import_records {
                pub mod csv;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_record {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_record {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_records {
                pub mod handler;
                pub mod projection;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod record_store;
                pub mod record_store_in_memory;
            }
        }
    }
}

pub mod shell;
