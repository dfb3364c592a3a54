//! Screens of the wallet and the text they render from fetched data.
//!
//! Entering a screen mounts a fresh view, which issues that screen's reads.
//! Leaving it drops the view together with its fetchers.

use crate::api::{AddressResponse, ApiClient, BalanceResponse, ADDRESS_PATH, BALANCE_PATH};
use crate::fetch::{FetchResult, Fetcher, Waker};
use crate::ui::events::WriteAction;
use crate::ui::mvi::Reducer;
use crate::ui::send_coin::{SendCoinFormState, SendCoinIntent, SendCoinReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Home,
    Address,
    UpdateBlockchain,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Address, Screen::UpdateBlockchain];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Address => "Show my address",
            Screen::UpdateBlockchain => "Update Blockchain",
        }
    }
}

pub fn balance_text(result: &FetchResult<BalanceResponse>) -> String {
    let balance = result.data().map(|b| b.balance).unwrap_or(0);
    format!("Current Balance: {}", balance)
}

pub fn address_text(result: &FetchResult<AddressResponse>) -> String {
    let address = result.data().map(|a| a.address.as_str()).unwrap_or("");
    format!("My Address: {}", address)
}

pub struct HomeView {
    balance: Fetcher<BalanceResponse>,
    form: SendCoinFormState,
}

impl HomeView {
    pub fn mount(client: ApiClient, waker: Waker) -> Self {
        let mut balance = Fetcher::new(client).with_waker(waker);
        balance.use_path(BALANCE_PATH);
        Self {
            balance,
            form: SendCoinFormState::default(),
        }
    }

    pub fn balance(&self) -> &FetchResult<BalanceResponse> {
        self.balance.result()
    }

    pub fn form(&self) -> &SendCoinFormState {
        &self.form
    }

    pub fn dispatch_form(&mut self, intent: SendCoinIntent) {
        dispatch_mvi!(self, form, SendCoinReducer, intent);
    }
}

pub struct AddressView {
    address: Fetcher<AddressResponse>,
}

impl AddressView {
    pub fn mount(client: ApiClient, waker: Waker) -> Self {
        let mut address = Fetcher::new(client).with_waker(waker);
        address.use_path(ADDRESS_PATH);
        Self { address }
    }

    pub fn address(&self) -> &FetchResult<AddressResponse> {
        self.address.result()
    }
}

/// Actions offered on the Update Blockchain screen, in display order.
pub const SYNC_ACTIONS: [WriteAction; 2] = [WriteAction::UpdateBlockchain, WriteAction::GenerateBlock];

#[derive(Debug, Default)]
pub struct UpdateBlockchainView {
    selected: usize,
    in_flight: Option<WriteAction>,
}

impl UpdateBlockchainView {
    pub fn selected(&self) -> WriteAction {
        SYNC_ACTIONS[self.selected.min(SYNC_ACTIONS.len() - 1)]
    }

    pub fn in_flight(&self) -> Option<WriteAction> {
        self.in_flight
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = SYNC_ACTIONS.len();
        self.selected = if direction.is_negative() {
            (self.selected + len - 1) % len
        } else {
            (self.selected + 1) % len
        };
    }

    pub(crate) fn set_in_flight(&mut self, action: Option<WriteAction>) {
        self.in_flight = action;
    }
}

pub enum View {
    Home(HomeView),
    Address(AddressView),
    UpdateBlockchain(UpdateBlockchainView),
}

impl View {
    pub fn mount(screen: Screen, client: ApiClient, waker: Waker) -> Self {
        match screen {
            Screen::Home => View::Home(HomeView::mount(client, waker)),
            Screen::Address => View::Address(AddressView::mount(client, waker)),
            Screen::UpdateBlockchain => View::UpdateBlockchain(UpdateBlockchainView::default()),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            View::Home(_) => Screen::Home,
            View::Address(_) => Screen::Address,
            View::UpdateBlockchain(_) => Screen::UpdateBlockchain,
        }
    }

    /// Apply finished reads. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        match self {
            View::Home(home) => home.balance.poll(),
            View::Address(view) => view.address.poll(),
            View::UpdateBlockchain(_) => false,
        }
    }

    /// Re-read the data shown on this screen.
    pub fn refresh(&mut self) {
        match self {
            View::Home(home) => home.balance.refresh(),
            View::Address(view) => view.address.refresh(),
            View::UpdateBlockchain(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ErrorInfo, ErrorKind};

    #[test]
    fn balance_text_shows_value() {
        let result = FetchResult {
            data: Some(BalanceResponse { balance: 42 }),
            error: None,
            is_loading: false,
        };
        assert_eq!(balance_text(&result), "Current Balance: 42");
    }

    #[test]
    fn balance_text_falls_back_to_zero_on_error() {
        let result = FetchResult {
            data: None,
            error: Some(ErrorInfo::new(ErrorKind::Connection, "refused")),
            is_loading: false,
        };
        assert_eq!(balance_text(&result), "Current Balance: 0");
    }

    #[test]
    fn address_text_empty_while_loading() {
        assert_eq!(address_text(&FetchResult::loading()), "My Address: ");
    }

    #[test]
    fn sync_selection_wraps() {
        let mut view = UpdateBlockchainView::default();
        assert_eq!(view.selected(), WriteAction::UpdateBlockchain);
        view.move_selection(-1);
        assert_eq!(view.selected(), WriteAction::GenerateBlock);
        view.move_selection(1);
        assert_eq!(view.selected(), WriteAction::UpdateBlockchain);
    }
}
