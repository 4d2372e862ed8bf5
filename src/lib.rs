pub mod shared {
    pub mod core {
        pub mod entity;
    }
    pub mod infrastructure {
        pub mod repository;
    }
}

pub mod modules {
    pub mod administration {
        pub mod core {
            pub mod employee;
            pub mod role;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod profile;
            pub mod register_employee {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod list_employees {
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod delete_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_roles {
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod fake_data;
            }
        }
    }
}

pub mod shell;
