//! Wallet Connect Button
//!
//! Connect / disconnect the mock wallet through `/api/v1/wallet/*`.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

#[component]
pub fn WalletButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (pending, set_pending) = create_signal(false);

    let on_connect = move |_| {
        set_pending.set(true);
        spawn_local(async move {
            match api::connect_wallet().await {
                Ok(session) => {
                    state.wallet.set(session);
                    state.show_success("Wallet connected");
                }
                Err(e) => state.show_error(&e),
            }
            set_pending.set(false);
        });
    };

    let on_disconnect = move |_| {
        spawn_local(async move {
            match api::disconnect_wallet().await {
                Ok(session) => state.wallet.set(session),
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        {move || {
            let wallet = state.wallet.get();
            if wallet.connected {
                view! {
                    <div class="flex items-center space-x-3">
                        <span class="w-8 h-8 rounded-full bg-orange-500 text-white text-xs font-bold flex items-center justify-center">
                            {wallet.avatar_initials()}
                        </span>
                        <div class="text-sm">
                            <p class="font-mono">{wallet.short_address()}</p>
                            <p class="text-gray-500">{format!("{} INFLAMM", wallet.balance_display)}</p>
                            {wallet.network.map(|network| view! {
                                <p class="text-xs text-gray-400">
                                    {format!("{} network (chain {})", network.name, network.chain_id)}
                                </p>
                            })}
                        </div>
                        <button
                            on:click=on_disconnect
                            class="px-3 py-1 text-sm rounded-lg border border-gray-300 hover:bg-gray-100"
                        >
                            "Disconnect"
                        </button>
                    </div>
                }
                .into_view()
            } else {
                view! {
                    <button
                        on:click=on_connect
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-lg bg-orange-500 hover:bg-orange-600 disabled:bg-gray-400 text-white font-medium"
                    >
                        {move || if pending.get() { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                }
                .into_view()
            }
        }}
    }
}
