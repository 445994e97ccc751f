//! Audio bridge systems and the headless audio thread.
//!
//! - [`audio_thread`] runs on its own OS thread and consumes
//!   [`AudioCmd`] messages, answering with [`AudioMessage`]s.
//! - [`forward_audio_cmds`] forwards ECS `AudioCmd` messages (written by
//!   collision responders) over the bridge channel.
//! - [`poll_audio_messages`] drains the thread's replies into the ECS
//!   message queue.
//!
//! There is no output device: the thread records and logs what would be
//! played. The channel layout stays the same for a real backend.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};

/// Drain any pending messages from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so readers observe this frame's writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the audio thread.
///
/// Blocks on the command channel until [`AudioCmd::Shutdown`] arrives or
/// every sender is dropped.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    debug!("[audio] thread starting (id={:?})", std::thread::current().id());
    let mut played: u64 = 0;

    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            AudioCmd::PlayFx { id } => {
                played += 1;
                info!("[audio] play fx '{}'", id);
                let _ = tx_msg.send(AudioMessage::FxPlayed { id });
            }
            AudioCmd::Shutdown => break,
        }
    }

    debug!("[audio] thread exiting after {} fx", played);
}
