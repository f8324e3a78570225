use avr_device::atmega328p::TC0;

const CS_DIV64: u8 = 0x03;
const TICKS_PER_MS: u8 = 250;

/// Busy wait on Timer0
pub fn delay_ms(ms: u16) {
    // 16MHz/64 = 250kHz, 250 ticks = 1ms
    unsafe {
        let p = TC0::ptr();
        (*p).tccr0a.write(|w| w.bits(0));
        (*p).tcnt0.write(|w| w.bits(0));
        (*p).tccr0b.write(|w| w.bits(CS_DIV64));

        for _ in 0..ms {
            while (*p).tcnt0.read().bits() < TICKS_PER_MS {}
            (*p).tcnt0.write(|w| w.bits(0));
        }

        (*p).tccr0b.write(|w| w.bits(0));
    }
}
