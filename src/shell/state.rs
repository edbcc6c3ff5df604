use std::sync::Arc;

use crate::adapters::in_memory::in_memory_entity_store::InMemoryEntityStore;
use crate::application::command_handlers::add_booking_handler::AddBookingHandler;
use crate::application::command_handlers::add_comment_handler::AddCommentHandler;
use crate::application::command_handlers::approve_booking_handler::ApproveBookingHandler;
use crate::application::command_handlers::create_request_handler::CreateRequestHandler;
use crate::application::command_handlers::item_command_handler::ItemCommandHandler;
use crate::application::command_handlers::user_command_handler::UserCommandHandler;
use crate::application::query_handlers::booking_queries::{BookingQueryHandler, OwnerPagination};
use crate::application::query_handlers::item_queries::ItemQueryHandler;
use crate::application::query_handlers::request_queries::RequestQueryHandler;
use crate::application::query_handlers::user_queries::UserQueryHandler;
use crate::core::clock::Clock;

type Store = InMemoryEntityStore;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub add_booking_handler: Arc<AddBookingHandler<Store>>,
    pub approve_booking_handler: Arc<ApproveBookingHandler<Store>>,
    pub booking_queries: Arc<BookingQueryHandler<Store>>,
    pub user_command_handler: Arc<UserCommandHandler<Store>>,
    pub user_queries: Arc<UserQueryHandler<Store>>,
    pub item_command_handler: Arc<ItemCommandHandler<Store>>,
    pub add_comment_handler: Arc<AddCommentHandler<Store>>,
    pub item_queries: Arc<ItemQueryHandler<Store>>,
    pub create_request_handler: Arc<CreateRequestHandler<Store>>,
    pub request_queries: Arc<RequestQueryHandler<Store>>,
}

impl AppState {
    pub fn new(store: Arc<Store>, clock: Arc<dyn Clock>, owner_pagination: OwnerPagination) -> Self {
        Self {
            add_booking_handler: Arc::new(AddBookingHandler::new(store.clone())),
            approve_booking_handler: Arc::new(ApproveBookingHandler::new(store.clone())),
            booking_queries: Arc::new(BookingQueryHandler::new(
                store.clone(),
                clock.clone(),
                owner_pagination,
            )),
            user_command_handler: Arc::new(UserCommandHandler::new(store.clone())),
            user_queries: Arc::new(UserQueryHandler::new(store.clone())),
            item_command_handler: Arc::new(ItemCommandHandler::new(store.clone())),
            add_comment_handler: Arc::new(AddCommentHandler::new(store.clone(), clock.clone())),
            item_queries: Arc::new(ItemQueryHandler::new(store.clone(), clock.clone())),
            create_request_handler: Arc::new(CreateRequestHandler::new(store.clone(), clock.clone())),
            request_queries: Arc::new(RequestQueryHandler::new(store)),
            clock,
        }
    }
}
