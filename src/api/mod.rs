//! High-level Hookfreight resource services.
//!
//! The primary SDK surface is exposed via service accessors on clients:
//! - `Client::apps()` / `BlockingClient::apps()`
//! - `Client::endpoints()` / `BlockingClient::endpoints()`
//! - `Client::events()` / `BlockingClient::events()`
//! - `Client::deliveries()` / `BlockingClient::deliveries()`
//!
//! Route table. Whether a route's payload is wrapped in the `{message, data}`
//! envelope is fixed per route and mirrored one-to-one by which client helper
//! the method calls (`send_enveloped` vs `send_json` vs `send_unit`):
//!
//! | Verb   | Route                         | Decode                    |
//! |--------|-------------------------------|---------------------------|
//! | GET    | `/apps`                       | enveloped `AppList`       |
//! | POST   | `/apps`                       | enveloped `App`           |
//! | GET    | `/apps/{id}`                  | enveloped `App`           |
//! | PUT    | `/apps/{id}`                  | enveloped `App`           |
//! | DELETE | `/apps/{id}`                  | enveloped `AppDeleted`    |
//! | GET    | `/apps/{id}/endpoints`        | enveloped `EndpointList`  |
//! | POST   | `/endpoints`                  | enveloped `Endpoint`      |
//! | GET    | `/endpoints/{id}`             | enveloped `Endpoint`      |
//! | PUT    | `/endpoints/{id}`             | enveloped `Endpoint`      |
//! | DELETE | `/endpoints/{id}`             | enveloped `Endpoint`      |
//! | GET    | `/events`                     | enveloped `EventList`     |
//! | GET    | `/events/{id}`                | enveloped `WebhookEvent`  |
//! | GET    | `/endpoints/{id}/events`      | enveloped `EventList`     |
//! | POST   | `/events/{id}/replay`         | unit                      |
//! | GET    | `/deliveries`                 | enveloped `DeliveryList`  |
//! | GET    | `/events/{id}/deliveries`     | enveloped `DeliveryList`  |
//! | POST   | `/deliveries/{id}/retry`      | unit                      |
//! | GET    | `/deliveries/queue/stats`     | unwrapped `QueueStats`    |

pub mod apps;
pub mod deliveries;
pub mod endpoints;
pub mod events;

pub use apps::*;
pub use deliveries::*;
pub use endpoints::*;
pub use events::*;
