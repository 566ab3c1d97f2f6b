mod codec;
mod mock_socket;

pub use {
    codec::{
        PatchRecord, decode_asset, decode_assets, decode_patches, encode_asset, encode_assets,
    },
    mock_socket::{MockSocket, ReadyState, SocketEvent},
};
